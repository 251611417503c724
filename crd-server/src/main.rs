mod config;
mod error;
mod gh;
mod httpd;
mod middleware;

use clap::Parser;
use config::Config;
use log::info;

type ServerResult<T> = Result<T, error::ServerError>;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli
{
    /// address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    address: String,

    /// server port
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> ServerResult<()>
{
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("debug"));

    let cli = Cli::parse();

    // initialize and setup the config singleton
    {
        let mut config = Config::writeu();

        config.address = cli.address;
        config.port = cli.port;
    }

    info!(
        "Serving CRD references on {}:{}",
        Config::readu().address,
        Config::readu().port
    );

    httpd::run().await?;

    Ok(())
}
