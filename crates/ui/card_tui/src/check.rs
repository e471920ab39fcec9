//! `cardform check`: run the submit flow once without a terminal.

use std::io::Write;

use card_form::{CardField, CardSession, Outcome};
use color_eyre::Result;
use tracing::info;

use crate::cli::CheckArgs;

/// Feed the arguments through a fresh session and submit.
///
/// Prints `accepted` or one `<field>: <message>` line per error (or the JSON
/// snapshot with `--json`) and returns the submit outcome.
pub fn run(args: &CheckArgs, out: &mut impl Write) -> Result<Outcome> {
    let mut session = CardSession::new();
    for (field, raw) in [
        (CardField::Name, &args.name),
        (CardField::Number, &args.number),
        (CardField::ExpMonth, &args.exp_month),
        (CardField::ExpYear, &args.exp_year),
        (CardField::Cvc, &args.cvc),
    ] {
        session.update(field, raw);
    }

    let outcome = session.submit();
    info!(?outcome, "check finished");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &session.snapshot())?;
        writeln!(out)?;
    } else if outcome == Outcome::Accepted {
        writeln!(out, "accepted")?;
    } else {
        for (field, message) in session.errors().iter() {
            writeln!(out, "{field}: {message}")?;
        }
    }

    Ok(outcome)
}
