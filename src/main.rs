use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use chatshell::cli::{CliArgs, ScriptEvent};
use chatshell::keyboard::{CommandModifier, DefaultPlatform};
use chatshell::resizer::ResizeNotifier;
use chatshell::runtime::StaticNoticeSource;
use chatshell::settings::{FileStore, MemoryStore, SettingsStore};
use chatshell::{Dispatcher, Shell, ShellConfig, ShellModel};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if args.log {
        chatshell::tracing::init();
    }

    let config = match &args.config {
        Some(path) => ShellConfig::load_from(path),
        None => ShellConfig::load(),
    };
    let command = config.command_modifier_or(CommandModifier::platform_default());

    let settings: Rc<dyn SettingsStore> = match &args.store {
        Some(path) => Rc::new(
            FileStore::open(path)
                .with_context(|| format!("opening settings store {}", path.display()))?,
        ),
        None => match FileStore::open_default() {
            Some(store) => Rc::new(store),
            None => Rc::new(MemoryStore::new()),
        },
    };

    let source = match &args.notices {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading notices {}", path.display()))?;
            serde_json::from_str::<StaticNoticeSource>(&text)
                .with_context(|| format!("parsing notices {}", path.display()))?
        }
        None => StaticNoticeSource::new(),
    };

    let dispatcher = Rc::new(Dispatcher::new());
    dispatcher.register(|action| match serde_json::to_string(action) {
        Ok(line) => println!("{}", line),
        Err(e) => tracing::warn!("Failed to serialize {}: {}", action.name(), e),
    });

    let model = ShellModel::new(
        config,
        Rc::clone(&dispatcher),
        settings,
        Rc::new(ResizeNotifier::new()),
        Box::new(DefaultPlatform::new(command)),
    );
    let mut shell = Shell::new(model, source);

    match &args.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening script {}", path.display()))?;
            replay(&mut shell, &dispatcher, BufReader::new(file), command).await
        }
        None => replay(&mut shell, &dispatcher, BufReader::new(tokio::io::stdin()), command).await,
    }
}

/// Feed every script line to the shell, flushing queued actions after each
async fn replay<R: AsyncBufRead + Unpin>(
    shell: &mut Shell<StaticNoticeSource>,
    dispatcher: &Dispatcher,
    reader: R,
    command: CommandModifier,
) -> Result<()> {
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: ScriptEvent =
            serde_json::from_str(line).with_context(|| format!("line {}: bad event", line_no))?;
        let msg = event
            .into_msg(command)
            .with_context(|| format!("line {}: bad key", line_no))?;
        shell.send(msg).await;
        dispatcher.flush();
    }
    Ok(())
}
