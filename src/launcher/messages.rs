//! User-visible text.

use crate::requirements::version::PythonVersion;
use std::path::Path;

pub const STARTING: &str = "正在启动贷款分期金融计算器...";
pub const PRESS_ANY_KEY: &str = "按任意键退出...";
pub const PYTHON_DOWNLOAD_HINT: &str = "下载地址: https://www.python.org/downloads/";
pub const PIP_HINT: &str = "请确保已安装依赖包: pip install -r requirements.txt";
pub const FINISHED: &str = "程序已退出";

pub fn python_not_found(minimum: PythonVersion) -> String {
    format!(
        "错误: 未找到 Python，请先安装 Python {}.{} 或更高版本",
        minimum.major, minimum.minor
    )
}

pub fn python_too_old(found: PythonVersion, minimum: PythonVersion) -> String {
    format!(
        "错误: Python 版本过低 (当前 {})，请安装 Python {}.{} 或更高版本",
        found, minimum.major, minimum.minor
    )
}

pub fn python_broken(path: &Path, detail: &str) -> String {
    format!("错误: 无法运行 Python ({}): {}", path.display(), detail)
}

pub fn python_found(path: &Path, version: PythonVersion) -> String {
    format!("已找到 Python {} ({})", version, path.display())
}

pub fn missing_modules(modules: &[String]) -> String {
    format!("导入错误: 缺少依赖包 {}", modules.join(", "))
}

pub fn runtime_error(detail: &str) -> String {
    format!("运行时错误: {}", detail)
}

pub fn script_not_found(path: &Path) -> String {
    runtime_error(&format!("找不到程序文件 {}", path.display()))
}

pub fn abnormal_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("程序异常退出 (退出码 {})", code),
        None => "程序被信号终止".to_string(),
    }
}
