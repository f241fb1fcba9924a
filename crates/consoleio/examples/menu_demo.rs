//! Interactive walk through the prompt helpers.
//!
//! Run with `cargo run -p consoleio --example menu_demo`, or pipe answers in:
//! `printf '2\n1\n3\n0\nKai\n\n' | cargo run -p consoleio --example menu_demo`.

use consoleio::logging::ConsoleLoggerBuilder;
use consoleio::{
    ChoiceOptions, ConsoleConfig, InputRequest, MultiOptions, PAUSE_MESSAGE, Panel, as_session,
    bye, console, get_choice, get_choices, get_input, pause,
};

fn pick_breakfast() -> consoleio::Result<()> {
    let out = console();

    let drink = get_choice(&["Tea", "Coffee", "Juice"], &ChoiceOptions::default().exitable(true))?;
    match drink {
        Some(drink) => out.info(&format!("Drink: {drink}")),
        None => out.warn("No drink then"),
    };

    let sides = get_choices(
        &["Toast", "Eggs", "Fruit"],
        MultiOptions::default().allable(true).exitable(true),
    )?;
    out.echo_all(sides.iter(), consoleio::LineKind::Info);

    let name = get_input(
        &InputRequest::new()
            .question("Who is this for?")
            .default_value("guest"),
    )?;
    out.panel(&Panel::new(format!("Order for {name}")).title("Receipt").style("info"));

    pause(PAUSE_MESSAGE)?;
    Ok(())
}

fn main() {
    let config = ConsoleConfig::from_env();
    ConsoleLoggerBuilder::from_config(&config).try_init();

    if let Err(e) = as_session(console(), pick_breakfast) {
        consoleio::bye_with_error(&e.to_string());
    }
    bye("Enjoy!");
}
