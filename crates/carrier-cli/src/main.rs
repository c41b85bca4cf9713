use anyhow::Result;
use clap::Parser;
use cliclack::input;

use carrier::agent::Agent;
use carrier::config::Config;
use carrier::graph::GraphClient;
use carrier::search::SearchClient;
use carrier::systems::AssistantSystem;
use carrier::workflow::WorkflowClient;

mod session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The question to ask, joined into a single prompt
    #[arg(trailing_var_arg = true)]
    question: Vec<String>,
}

impl Cli {
    fn question(&self) -> Option<String> {
        if self.question.is_empty() {
            None
        } else {
            Some(self.question.join(" "))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let question = match cli.question() {
        Some(question) => question,
        None => input("Enter your question:").interact()?,
    };

    let config = Config::from_env()?;
    let search = SearchClient::new(config.search);
    let workflow = WorkflowClient::new(config.workflow)?;

    let mut agent = GraphClient::new(config.graph);
    agent.add_system(Box::new(AssistantSystem::new(search, workflow)));

    session::run(&agent, &question).await
}
