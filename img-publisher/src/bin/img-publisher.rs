use env_logger::Env;
use img_publisher::{
    cli::Cli, node::Node, CancellationToken, CompressedImage, Error, ImagePublisher,
    PublisherConfig,
};
use log::{error, info, warn};

/// Everything owned here is dropped before the caller picks an exit code,
/// so the publisher and node unregister on error paths too.
fn run(cli: &Cli, sigint: &CancellationToken) -> Result<u32, Error> {
    let config = PublisherConfig::default();
    config.validate()?;

    let mut node = Node::new(&config.node_name, config.anonymous)?;
    let outlet = node.advertise::<CompressedImage>(&config.topic, config.queue_size)?;

    let mut feed = ImagePublisher::new(config, outlet)?;
    feed.load(&cli.image, node.now())?;
    let published = feed.run(sigint)?;
    if !node.is_ok() {
        warn!("Shut down by the ROS master.");
    }
    Ok(published)
}

fn main() {
    // Logger setup
    let log_env = Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::init_from_env(log_env);

    // Parse user args
    let cli = Cli::from_env();

    // Catch SIGINT and SIGTERM
    let sigint = CancellationToken::new();
    let handler_sigint = sigint.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        warn!("received Ctrl+C! Shutting down.");
        handler_sigint.cancel();
    }) {
        error!("{}", Error::Signal(e));
        std::process::exit(1);
    }

    match run(&cli, &sigint) {
        Ok(published) => {
            info!("Done. {} messages published.", published);
        }
        Err(e) => {
            error!("{}", e);
            warn!("Sorry, job failed.");
            std::process::exit(1);
        }
    }
}
