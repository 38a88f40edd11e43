//! Interactive CLI over the same queries the HTTP API serves.
use super::*;
use crate::window::Window;
use clap::Parser;
use std::io::Write;

pub struct CLI(API);

impl From<API> for CLI {
    fn from(api: API) -> Self {
        Self(api)
    }
}

impl CLI {
    pub async fn run(&self) -> anyhow::Result<()> {
        log::info!("entering analysis");
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input).await {
                    Err(e) => eprintln!("{}", e),
                    Ok(output) => println!("{}", output),
                },
            }
        }
        Ok(())
    }
    async fn handle(&self, input: &str) -> anyhow::Result<String> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Precipitation => Ok(serde_json::to_string_pretty(&self.0.precipitation().await?)?),
            Query::Stations => Ok(serde_json::to_string_pretty(&self.0.stations().await?)?),
            Query::Tobs => Ok(serde_json::to_string_pretty(&self.0.tobs().await?)?),
            Query::Schema => Ok(self.0.schema().to_string()),
            Query::Summary { start, end } => {
                let window = match end {
                    None => Window::starting(start),
                    Some(end) => Window::between(start, end),
                };
                match window {
                    Err(bounds) => Ok(bounds.to_string()),
                    Ok(window) => Ok(self.0.summary(&window).await?.to_string()),
                }
            }
        }
    }
}
