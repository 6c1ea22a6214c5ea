//! # 示例应用程序
//!
//! 演示组件注册、字段注入、冻结容器与全局容器的完整流程

use anyhow::Context;
use clap::Parser;
use component_macros::Bean;
use di_abstractions::{name, BeanLookup, Keeper, KeeperOption};
use di_impl::{global_keeper, install_global, Container};
use infrastructure_common::Initializer;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "hello-keeper")]
#[command(about = "Keeper 组件注册与注入演示")]
struct Args {
    /// 问候语后缀
    #[arg(short, long, default_value = "from keeper")]
    word: String,

    /// 并发读取的任务数
    #[arg(long, default_value_t = 4)]
    readers: usize,

    /// 是否启用严格标签模式
    #[arg(long)]
    strict_tags: bool,

    /// 日志过滤规则，设置了 RUST_LOG 时以 RUST_LOG 为准
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 问候服务
#[derive(Debug, Default, Bean)]
struct HelloSrv {
    word: String,
}

impl HelloSrv {
    fn hello(&self) -> String {
        format!("Hello World {}", self.word)
    }
}

impl Initializer for HelloSrv {}

/// 问候控制器
#[derive(Debug, Default, Bean)]
struct HelloCtl {
    #[bean(name = "helloService")]
    hello_srv: Option<Arc<HelloSrv>>,
    #[bean(name = "banner", optional)]
    banner: Option<Arc<String>>,
}

impl Initializer for HelloCtl {
    fn after_property_set(&mut self) {
        info!(
            "HelloCtl 依赖注入完成 (banner: {})",
            self.banner.as_deref().map_or("<none>", String::as_str)
        );
    }
}

impl HelloCtl {
    fn hello(&self) -> String {
        let greeting = self
            .hello_srv
            .as_ref()
            .map_or_else(|| "nobody home".to_string(), |srv| srv.hello());
        match &self.banner {
            Some(banner) => format!("[{banner}] {greeting}"),
            None => greeting,
        }
    }
}

/// 组合根：只需要依赖，不需要被其他组件发现
#[derive(Debug, Default, Bean)]
struct App {
    #[bean(name = "helloCtl")]
    ctl: Option<Arc<HelloCtl>>,
}

impl Initializer for App {}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    info!("启动 hello-keeper 演示");

    // 构建阶段
    let mut container = Container::new([
        KeeperOption::Label("hello-keeper".to_string()),
        KeeperOption::StrictTags(args.strict_tags),
    ]);
    container
        .register(HelloSrv { word: args.word }, [name("helloService")])
        .context("注册 helloService 失败")?;
    container
        .register(HelloCtl::default(), [name("helloCtl")])
        .context("注册 helloCtl 失败")?;

    let mut app = App::default();
    container.provide(&mut app).context("组合根注入失败")?;
    if let Some(ctl) = &app.ctl {
        info!("组合根: {}", ctl.hello());
    }

    // 冻结阶段
    install_global(container.freeze()).context("安装全局容器失败")?;
    let keeper = global_keeper().context("全局容器不可用")?;

    let mut handles = Vec::with_capacity(args.readers);
    for reader in 0..args.readers {
        let keeper = keeper.clone();
        handles.push(tokio::spawn(async move {
            keeper
                .get::<HelloCtl>("helloCtl")
                .map(|ctl| format!("reader {reader}: {}", ctl.hello()))
        }));
    }

    for handle in handles {
        if let Some(line) = handle.await? {
            info!("{}", line);
        }
    }

    let mut names: Vec<_> = keeper.names().collect();
    names.sort_unstable();
    info!("已注册组件: {}", names.join(", "));
    Ok(())
}
