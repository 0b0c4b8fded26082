/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 目标表单 URL
    pub form_url: String,
    /// 数据集 CSV 文件路径
    pub dataset_file: String,
    /// 提交状态列的列名（与同名数据字段严格区分）
    pub status_column: String,
    /// 每次运行最多提交的行数
    pub batch_size: usize,
    /// 表单的页数
    pub page_count: usize,
    /// 打开表单后的等待时间（毫秒）
    pub load_wait_ms: u64,
    /// 翻页后的等待时间（毫秒）
    pub nav_wait_ms: u64,
    /// 点击提交后的等待时间（毫秒）
    pub submit_wait_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 无法填写字段的记录文件
    pub warn_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_url: "https://docs.google.com/forms/d/1rGyn_Vh31Z6_ZzYrOaDfJ7x1BrfscmUM83qqlfSs178/viewform".to_string(),
            dataset_file: "FINAL_DATASET.csv".to_string(),
            status_column: "Submission_Status".to_string(),
            batch_size: 1,
            page_count: 4,
            load_wait_ms: 3000,
            nav_wait_ms: 2000,
            submit_wait_ms: 3000,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            warn_file: "warn.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            form_url: std::env::var("FORM_URL").unwrap_or(default.form_url),
            dataset_file: std::env::var("DATASET_FILE").unwrap_or(default.dataset_file),
            status_column: std::env::var("STATUS_COLUMN").unwrap_or(default.status_column),
            batch_size: std::env::var("BATCH_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.batch_size),
            page_count: std::env::var("PAGE_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_count),
            load_wait_ms: std::env::var("LOAD_WAIT_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.load_wait_ms),
            nav_wait_ms: std::env::var("NAV_WAIT_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.nav_wait_ms),
            submit_wait_ms: std::env::var("SUBMIT_WAIT_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.submit_wait_ms),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
        }
    }

    /// 用于单元测试的快速配置（去掉所有等待）
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            load_wait_ms: 0,
            nav_wait_ms: 0,
            submit_wait_ms: 0,
            warn_file: std::env::temp_dir()
                .join(format!("form_auto_submit_warn_{}.txt", std::process::id()))
                .to_string_lossy()
                .to_string(),
            ..Self::default()
        }
    }
}
