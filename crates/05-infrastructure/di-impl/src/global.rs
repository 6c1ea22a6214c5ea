//! 进程级全局容器

use crate::frozen::FrozenContainer;
use infrastructure_common::{KeeperError, KeeperResult};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

/// 全局容器，只能安装一次
static GLOBAL_KEEPER: OnceCell<FrozenContainer> = OnceCell::new();

/// 安装全局容器
///
/// 只接受冻结后的容器，因此全局容器始终是只读的。重复安装返回
/// [`KeeperError::GlobalAlreadyInstalled`]，已安装的容器保持不变。
pub fn install_global(container: FrozenContainer) -> KeeperResult<()> {
    let label = container.config().label.clone();
    GLOBAL_KEEPER.set(container).map_err(|_| {
        warn!("[{}] 全局容器已安装，忽略本次安装", label);
        KeeperError::GlobalAlreadyInstalled
    })?;
    info!("[{}] 全局容器安装完成", label);
    Ok(())
}

/// 获取全局容器
pub fn global_keeper() -> Option<&'static FrozenContainer> {
    GLOBAL_KEEPER.get()
}
