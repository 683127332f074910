//! CSS number formatting.
//!
//! Float-to-decimal formatting through `format!` has panicked on some
//! wasm toolchain/browser combinations, and style strings are rebuilt on every
//! pointer move. These helpers scale + round into an integer and format that
//! instead.
//!
//! Output is trimmed (`10px`, not `10.000px`) and never uses exponent
//! notation, which CSS rejects. Non-finite input renders as `0`.

/// Decimals kept for lengths and angles. Sub-thousandth precision is
/// invisible on screen.
const DECIMALS: u32 = 3;

pub fn num(v: f32) -> String {
    fmt_trimmed(v as f64, DECIMALS)
}

pub fn px(v: f32) -> String {
    format!("{}px", num(v))
}

pub fn deg(v: f32) -> String {
    format!("{}deg", num(v))
}

pub fn pct(v: f32) -> String {
    format!("{}%", num(v))
}

fn fmt_trimmed(v: f64, decimals: u32) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let scale = 10_i64.pow(decimals);
    let scaled = (v * scale as f64).round();
    if scaled.abs() > (i64::MAX / 2) as f64 {
        return "0".to_string();
    }

    let scaled = scaled as i64;
    let abs = scaled.unsigned_abs();
    let int_part = abs / scale as u64;
    let mut frac_part = abs % scale as u64;

    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if frac_part != 0 {
        let mut width = decimals as usize;
        while frac_part % 10 == 0 {
            frac_part /= 10;
            width -= 1;
        }
        let digits = frac_part.to_string();
        out.push('.');
        for _ in digits.len()..width {
            out.push('0');
        }
        out.push_str(&digits);
    }

    out
}
