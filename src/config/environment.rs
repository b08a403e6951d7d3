use std::env;

/// 读取布尔型环境变量：支持 true/false/1/0（大小写不敏感）
pub fn env_is_true(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v == "1"
        }
        Err(_) => default,
    }
}

/// 读取字符串环境变量，若不存在或为空则返回默认值
pub fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_is_true() {
        env::set_var("QBC_TEST_FLAG_A", "TRUE");
        env::set_var("QBC_TEST_FLAG_B", "0");
        assert!(env_is_true("QBC_TEST_FLAG_A", false));
        assert!(!env_is_true("QBC_TEST_FLAG_B", true));
        assert!(env_is_true("QBC_TEST_FLAG_MISSING", true));
    }

    #[test]
    fn test_env_or_default_blank() {
        env::set_var("QBC_TEST_BLANK", "  ");
        assert_eq!(env_or_default("QBC_TEST_BLANK", "x"), "x");
    }
}
