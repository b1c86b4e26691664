use anyhow::Result;
use learning_portal::app::App;
use learning_portal::config::Config;
use learning_portal::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let mut app = App::initialize(config);
    app.run().await?;

    Ok(())
}
