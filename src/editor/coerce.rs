//! 数值输入框的转换：解析失败时回退默认值，不向用户报错

/// 交易日偏移与涨跌幅阈值的缺省值
pub const DEFAULT_OFFSET: i64 = 0;
pub const DEFAULT_VALUE: f64 = 0.0;
/// 成交量比例的缺省值
pub const DEFAULT_RATIO: f64 = 1.0;

/// 解析整数；带小数的输入向零截断（"-2.7" -> -2）
pub fn parse_int_or(text: &str, default: i64) -> i64 {
    let text = text.trim();
    if let Ok(v) = text.parse::<i64>() {
        return v;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() < i64::MAX as f64 => v.trunc() as i64,
        _ => default,
    }
}

/// 解析浮点数；`inf`、`NaN` 视为解析失败
pub fn parse_float_or(text: &str, default: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_or() {
        assert_eq!(parse_int_or("-3", DEFAULT_OFFSET), -3);
        assert_eq!(parse_int_or(" 5 ", DEFAULT_OFFSET), 5);
        assert_eq!(parse_int_or("-2.7", DEFAULT_OFFSET), -2);
        assert_eq!(parse_int_or("", DEFAULT_OFFSET), 0);
        assert_eq!(parse_int_or("abc", DEFAULT_OFFSET), 0);
        assert_eq!(parse_int_or("1e400", 9), 9);
    }

    #[test]
    fn test_parse_float_or() {
        assert_eq!(parse_float_or("1.5", DEFAULT_RATIO), 1.5);
        assert_eq!(parse_float_or("", DEFAULT_RATIO), 1.0);
        assert_eq!(parse_float_or("NaN", DEFAULT_RATIO), 1.0);
        assert_eq!(parse_float_or("inf", DEFAULT_VALUE), 0.0);
        // 0 是合法输入，不会被替换为缺省值
        assert_eq!(parse_float_or("0", DEFAULT_RATIO), 0.0);
    }
}
