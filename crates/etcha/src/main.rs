mod app;
mod client;
mod logger;
mod session;

use std::io::{stdout, Stdout};

use app::App;
use crossterm::event::EventStream;
use etcha_core::config::SketchConfig;
use session::Session;

use crate::client::composer::layouter;

pub type Client = client::Client<client::CrosstermCanvas<Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SketchConfig::discover()?;

    let crossterm_canvas = client::CrosstermCanvas::new(stdout(), true)?;
    let client = Client::new(crossterm_canvas);

    let session = Session::new(layouter::sketch(client.shape()), &config)?;

    let (log_tx, log_rx) = tokio::sync::mpsc::unbounded_channel();
    logger::enable(log_tx);

    let mut app = App::new(client, session, log_rx);
    app.run(&mut EventStream::new()).await?;

    Ok(())
}
