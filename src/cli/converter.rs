use super::prompt::Prompter;
use super::ui;
use crate::core::{ConversionRequest, ConversionResult, Currency};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const PROCEED: u32 = 1;

fn result_line(result: &ConversionResult) -> String {
    format!(
        "The converted {} amount: {}",
        result.currency,
        ui::style_text(
            &ui::format_general(result.converted_amount),
            ui::StyleType::Value
        )
    )
}

/// Runs one pass of the menu. Returns whether the user asked to convert again.
fn convert_once<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<bool> {
    prompter.say_line("Available options for currency conversion are:")?;
    for currency in Currency::ALL {
        prompter.say_line(&format!(
            "{}. Convert to {}",
            currency.menu_number(),
            currency.name()
        ))?;
    }
    prompter.say_line("")?;

    let Some(target) = prompter
        .ask_choice("Your option: ")?
        .and_then(Currency::from_menu)
    else {
        debug!("Unrecognised selection, ending conversion");
        return Ok(false);
    };

    let amount_inr = prompter.ask_amount(
        &format!("\nEnter the INR amount to convert into {target}: "),
        "INR amount",
    )?;
    let result = ConversionRequest { target, amount_inr }.execute();
    info!(%target, amount_inr, converted = result.converted_amount, "Converted amount");
    prompter.say_line(&result_line(&result))?;

    prompter.say_line("Do you want to convert to a new currency?")?;
    prompter.say_line("Press 1 to 'proceed' and 2 to 'exit' from here\n")?;
    Ok(prompter.ask_choice("Your option: ")? == Some(PROCEED))
}

/// Interactive converter: repeats the menu for as long as the user chooses to proceed.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let mut prompter = Prompter::new(input, output);
    let mut conversions = 0usize;
    loop {
        let proceed = convert_once(&mut prompter)?;
        conversions += 1;
        if !proceed {
            break;
        }
    }
    debug!(conversions, "Converter finished");
    prompter.say_line("Thank you!")
}

/// Single non-interactive conversion.
pub fn run_once<W: Write>(mut output: W, request: ConversionRequest, json: bool) -> Result<()> {
    let result = request.execute();
    if json {
        writeln!(output, "{}", serde_json::to_string(&result)?)?;
    } else {
        writeln!(output, "{}", result_line(&result))?;
    }
    Ok(())
}

/// Prints the table of fixed rates.
pub fn run_rates<W: Write>(mut output: W) -> Result<()> {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Option"),
        ui::header_cell("Currency"),
        ui::header_cell("Name"),
        ui::header_cell("Rate (per INR)"),
    ]);
    for currency in Currency::ALL {
        table.add_row(vec![
            ui::number_cell(currency.menu_number().to_string()),
            comfy_table::Cell::new(currency.code()),
            comfy_table::Cell::new(currency.name()),
            ui::number_cell(ui::format_general(currency.rate())),
        ]);
    }

    writeln!(
        output,
        "{}\n",
        ui::style_text("Conversion rates from INR", ui::StyleType::Title)
    )?;
    writeln!(output, "{table}")?;
    Ok(())
}
