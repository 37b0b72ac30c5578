//! Number formatting shared by the text and CSV reports.

use super::Cell;


/// Significant digits shown in the text tables.
pub const TABLE_PRECISION: usize = 10;


/// Formats `v` like C's `%.{precision}g`: `precision` significant digits,
/// trailing zeros removed, scientific notation when the decimal exponent is
/// below -4 or at least `precision`.
///
/// ```
/// # use rootlab::report::format::format_g;
/// assert_eq!(format_g(2.0_f64.sqrt(), 10), "1.414213562");
/// assert_eq!(format_g(1.5e-7, 10), "1.5e-07");
/// assert_eq!(format_g(100.0, 10), "100");
/// ```
pub fn format_g(v: f64, precision: usize) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let p = precision.max(1);
    // rounding to `p` digits first decides the exponent (9.9999999999 -> 10)
    let sci = format!("{:.*e}", p - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}


/// Cell text in the fixed-width tables.
pub fn table_cell(cell: &Cell) -> String {
    match cell {
        Cell::Int(i)   => i.to_string(),
        Cell::Float(v) => format_g(*v, TABLE_PRECISION),
        Cell::Text(s)  => s.clone(),
    }
}


/// Cell text in the CSV: shortest round-trip representation of floats.
pub fn csv_cell(cell: &Cell) -> String {
    match cell {
        Cell::Int(i)   => i.to_string(),
        Cell::Float(v) if v.is_nan()      => "nan".to_string(),
        Cell::Float(v) if v.is_infinite() => if *v > 0.0 { "inf" } else { "-inf" }.to_string(),
        Cell::Float(v) => format!("{v:?}"),
        Cell::Text(s)  => s.clone(),
    }
}
