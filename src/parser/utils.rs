//! This module contains auxiliary validators

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_AMOUNT: Regex = Regex::new(r"^\d+(\.\d+)?$").unwrap();
    static ref RE_DATE: Regex = Regex::new(r"^(\d{2})-(\d{2})-(\d{4})$").unwrap();
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// A well-formed amount is a plain decimal number strictly greater than zero
pub fn is_valid_amount(input: &str) -> bool {
    if !RE_AMOUNT.is_match(input) {
        return false;
    }
    match input.parse::<f64>() {
        Ok(amount) => amount > 0.0,
        Err(_) => false,
    }
}

/// Parses a dd-MM-yyyy date, rejecting dates that do not exist
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let captures = RE_DATE.captures(input)?;
    let day = captures.get(1).unwrap().as_str().parse::<u32>().unwrap();
    let month = captures.get(2).unwrap().as_str().parse::<u32>().unwrap();
    let year = captures.get(3).unwrap().as_str().parse::<i32>().unwrap();
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_some()
}
