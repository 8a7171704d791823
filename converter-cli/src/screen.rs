//! Interactive converter screen.
//!
//! A line-oriented rendition of the converter: one controller, two currency
//! pickers, and a redraw every time the controller publishes a new state.

use std::fmt::Write as _;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use converter_hex::{ConversionController, CurrencySelector};
use converter_types::{ConversionOutcome, ConversionService, CurrencyCode, ScreenState};

pub const HELP: &str = "\
Commands:
  amount <value>   set the amount to convert
  from [CODE]      open the source picker, or choose CODE
  to [CODE]        open the target picker, or choose CODE
  close            close any open picker
  convert          convert the amount
  show             redraw the screen
  help             show this help
  quit             leave";

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Amount(String),
    Source(Option<String>),
    Target(Option<String>),
    Close,
    Convert,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_uppercase());

        match word.to_lowercase().as_str() {
            // Amount text is stored verbatim, so the raw remainder is kept.
            "amount" | "a" => Command::Amount(rest.to_string()),
            "from" | "f" => Command::Source(arg),
            "to" | "t" => Command::Target(arg),
            "close" => Command::Close,
            "convert" | "c" => Command::Convert,
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing to print; a state change (if any) triggers its own redraw.
    Quiet,
    Say(String),
    Quit,
}

/// Which picker a command refers to.
#[derive(Debug, Clone, Copy)]
enum Side {
    Source,
    Target,
}

pub struct Screen<S: ConversionService> {
    controller: ConversionController<S>,
    source: CurrencySelector,
    target: CurrencySelector,
}

impl<S: ConversionService> Screen<S> {
    pub fn new(controller: ConversionController<S>) -> Self {
        let state = controller.current_state();
        Self {
            source: CurrencySelector::new(state.source),
            target: CurrencySelector::new(state.target),
            controller,
        }
    }

    pub fn controller(&self) -> &ConversionController<S> {
        &self.controller
    }

    pub fn handle(&mut self, command: Command) -> Reaction {
        match command {
            Command::Amount(text) => {
                self.controller.set_amount_text(text);
                Reaction::Quiet
            }
            Command::Source(code) => self.pick(Side::Source, code),
            Command::Target(code) => self.pick(Side::Target, code),
            Command::Close => {
                self.source.close();
                self.target.close();
                Reaction::Quiet
            }
            Command::Convert => {
                // Invalid amounts and double submits are ignored silently.
                self.controller.submit();
                Reaction::Quiet
            }
            Command::Show => Reaction::Say(self.render(&self.controller.current_state())),
            Command::Help => Reaction::Say(HELP.to_string()),
            Command::Quit => Reaction::Quit,
            Command::Unknown(line) => {
                Reaction::Say(format!("Unknown command: {line} (type `help`)"))
            }
        }
    }

    fn pick(&mut self, side: Side, code: Option<String>) -> Reaction {
        let selector = match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        };

        let Some(code) = code else {
            selector.open();
            return Reaction::Say(render_picker(selector));
        };

        if !selector.choose(&code) {
            return Reaction::Say(format!(
                "Unknown currency: {code}\n{}",
                render_picker(selector)
            ));
        }

        let chosen = selector.selected();
        match side {
            Side::Source => self.controller.select_source(chosen),
            Side::Target => self.controller.select_target(chosen),
        }
        Reaction::Quiet
    }

    /// Renders the whole screen for `state`.
    pub fn render(&self, state: &ScreenState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "── Currency Converter ──");
        let _ = writeln!(out, "Amount: {}", state.amount_text);
        let _ = writeln!(out, "From:   {}", state.source);
        if self.source.is_open() {
            let _ = writeln!(out, "{}", render_picker(&self.source));
        }
        let _ = writeln!(out, "To:     {}", state.target);
        if self.target.is_open() {
            let _ = writeln!(out, "{}", render_picker(&self.target));
        }

        if state.is_loading {
            let _ = write!(out, "Converting...");
        } else if let Some(summary) = state.summary() {
            let _ = write!(out, "{summary}");
            if let ConversionOutcome::Success { converted_amount } = state.outcome {
                let _ = write!(out, "  ({})", state.target.format_amount(converted_amount));
            }
        } else {
            let _ = write!(out, "[convert]");
        }
        out
    }
}

fn render_picker(selector: &CurrencySelector) -> String {
    selector
        .options()
        .iter()
        .map(|code| {
            let marker = if *code == selector.selected() { '*' } else { ' ' };
            format!("  {marker} {:<4}{}", code.code(), code.name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists every supported currency, one per line.
pub fn render_currencies() -> String {
    CurrencyCode::all()
        .iter()
        .map(|code| format!("{:<4}{:<4}{}", code.code(), code.symbol(), code.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs the screen until the user quits or stdin closes.
///
/// Input keeps being read while a conversion is in flight; the result is
/// applied as soon as it arrives.
pub async fn run<S: ConversionService>(mut screen: Screen<S>) -> anyhow::Result<()> {
    let mut updates = screen.controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let initial = screen.render(&updates.borrow_and_update());
    stdout.write_all(format!("{HELP}\n\n{initial}\n").as_bytes()).await?;
    stdout.flush().await?;

    loop {
        let loading = screen.controller().is_loading();
        let output = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match screen.handle(Command::parse(&line)) {
                    Reaction::Quiet => None,
                    Reaction::Say(text) => Some(text),
                    Reaction::Quit => break,
                }
            }
            Some(_) = screen.controller.settle(), if loading => None,
            Ok(()) = updates.changed() => {
                let state = updates.borrow_and_update().clone();
                Some(screen.render(&state))
            }
        };

        if let Some(text) = output {
            stdout.write_all(format!("{text}\n").as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
