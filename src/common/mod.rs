//! 公共工具模块

pub mod auth;
pub mod handlers;
#[cfg(test)]
pub mod test_support;

/// 拼接服务基础地址和路径，兼容基础地址末尾带 `/` 的情况
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://business_service:5002", "/process"),
            "http://business_service:5002/process"
        );
        assert_eq!(
            join_url("http://database_service:5003/", "write"),
            "http://database_service:5003/write"
        );
    }
}
