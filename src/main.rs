use anyhow::Result;
use mnist_digit_submit::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 命令行参数是待识别的图片路径
    let image_paths: Vec<String> = std::env::args().skip(1).collect();

    // 初始化并运行应用
    let mut app = App::initialize(config);
    app.run(image_paths).await?;

    Ok(())
}
