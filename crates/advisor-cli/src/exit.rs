//! 错误到进程退出码的映射

use std::process::ExitCode;

use advisory_shared::SharedError;

/// 一般失败（文件缺失、配置或日志初始化失败等）
pub const EXIT_FAILURE: u8 = 1;

/// 调用方输入无效（JSON、规则集合或事实集合格式错误）
pub const EXIT_INPUT_ERROR: u8 = 2;

/// 在错误链中查找外围错误
pub fn shared_error(err: &anyhow::Error) -> Option<&SharedError> {
    err.chain().find_map(|e| e.downcast_ref::<SharedError>())
}

pub fn exit_status(err: &anyhow::Error) -> u8 {
    match shared_error(err) {
        Some(shared) if shared.is_input_error() => EXIT_INPUT_ERROR,
        _ => EXIT_FAILURE,
    }
}

/// 输出错误信息（带错误码）并返回退出码
pub fn report(err: &anyhow::Error) -> ExitCode {
    match shared_error(err) {
        Some(shared) => eprintln!("Error [{}]: {:#}", shared.code(), err),
        None => eprintln!("Error: {:#}", err),
    }
    ExitCode::from(exit_status(err))
}
