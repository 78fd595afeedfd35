use anyhow::Result;
use question_sql_gen::utils::logging;
use question_sql_gen::{App, Config};

fn main() -> Result<()> {
    // 加载配置，命令行参数作为输入文件列表
    let config = Config::load()?.with_input_files(std::env::args().skip(1));

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}
