use super::{load_catalog, ui};
use crate::core::{ConverterClient, CurrencyService};
use anyhow::{Result, anyhow};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  <amount> [FROM] [TO]   set the amount (and optionally the currencies) and convert
  amount <n>             set the amount without converting
  from <code>            select the currency to convert from
  to <code>              select the currency to convert to
  swap                   exchange the two selected currencies
  convert                convert the current amount (or just press Enter)
  list                   show the available currencies
  reload                 reload the currency list
  help                   show this message
  quit                   leave";

/// A single line entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    SetAmount(String),
    ConvertWith {
        amount: String,
        from: Option<String>,
        to: Option<String>,
    },
    From(String),
    To(String),
    Swap,
    Convert,
    List,
    Reload,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(Input::Convert);
        };

        let single_arg = |name: &str| match rest {
            [arg] => Ok(arg.to_string()),
            _ => Err(anyhow!("Usage: {name} <value>")),
        };

        match first.to_lowercase().as_str() {
            "amount" | "a" => single_arg("amount").map(Input::SetAmount),
            "from" | "f" => single_arg("from").map(Input::From),
            "to" | "t" => single_arg("to").map(Input::To),
            "swap" | "s" if rest.is_empty() => Ok(Input::Swap),
            "convert" | "c" if rest.is_empty() => Ok(Input::Convert),
            "list" | "l" if rest.is_empty() => Ok(Input::List),
            "reload" | "r" if rest.is_empty() => Ok(Input::Reload),
            "help" | "h" | "?" if rest.is_empty() => Ok(Input::Help),
            "quit" | "q" | "exit" if rest.is_empty() => Ok(Input::Quit),
            _ if rest.len() <= 2 => Ok(Input::ConvertWith {
                amount: first.to_string(),
                from: rest.first().map(|s| s.to_string()),
                to: rest.get(1).map(|s| s.to_string()),
            }),
            _ => Err(anyhow!(
                "Unknown command: {line}. Type 'help' for a list of commands."
            )),
        }
    }
}

/// Runs the prompt loop on standard input.
pub async fn run<S: CurrencyService>(client: &mut ConverterClient<S>) -> Result<()> {
    run_with_input(client, BufReader::new(tokio::io::stdin()), true).await
}

/// Runs the prompt loop over `input` until it is exhausted or the user quits.
pub async fn run_with_input<S, R>(
    client: &mut ConverterClient<S>,
    input: R,
    show_prompt: bool,
) -> Result<()>
where
    S: CurrencyService,
    R: AsyncBufRead + Unpin,
{
    println!("{}", ui::style_text("Currency converter", ui::StyleType::Title));
    println!("{}", ui::style_text("Type 'help' for a list of commands.", ui::StyleType::Subtle));

    if let Err(e) = load_catalog(client).await {
        println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
    }
    client.on_state_change(ui::spinner_observer(ui::new_spinner("Converting...")));

    let mut amount = String::new();
    let mut lines = input.lines();
    loop {
        if show_prompt {
            print!("{} > ", ui::format_selection(client.selection()));
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let parsed = match line.parse::<Input>() {
            Ok(parsed) => parsed,
            Err(e) => {
                println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
                continue;
            }
        };

        match parsed {
            Input::Quit => break,
            Input::Help => println!("{HELP}"),
            Input::List => println!("{}", ui::catalog_table(&client.catalog(), client.selection())),
            Input::Reload => match load_catalog(client).await {
                Ok(count) => println!("Loaded {count} currencies"),
                Err(e) => println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error)),
            },
            Input::SetAmount(value) => amount = value,
            Input::From(code) => report(
                client
                    .select_from(&code)
                    .map(|()| ui::format_choice("From", &client.catalog(), &code)),
            ),
            Input::To(code) => report(
                client
                    .select_to(&code)
                    .map(|()| ui::format_choice("To", &client.catalog(), &code)),
            ),
            Input::Swap => {
                client.swap();
                let swapped = format!("⇅ {}", ui::format_selection(client.selection()));
                println!("{}", ui::style_text(&swapped, ui::StyleType::Subtle));
            }
            Input::Convert => {
                client.submit(&amount).await;
                ui::print_view(&client.view());
            }
            Input::ConvertWith {
                amount: value,
                from,
                to,
            } => {
                amount = value;
                if let Some(code) = from {
                    if let Err(e) = client.select_from(&code) {
                        report(Err(e));
                        continue;
                    }
                }
                if let Some(code) = to {
                    if let Err(e) = client.select_to(&code) {
                        report(Err(e));
                        continue;
                    }
                }
                client.submit(&amount).await;
                ui::print_view(&client.view());
            }
        }
    }

    Ok(())
}

fn report(result: Result<String>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(e) => println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error)),
    }
}
