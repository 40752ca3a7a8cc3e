//! Interactive menu
//!
//! Drives one account through a numbered text menu. Input and output are
//! generic so the whole session can run against in-memory buffers.

use std::io::{BufRead, Write};

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{format_balance, format_history};
use crate::error::PassbookResult;
use crate::models::Money;
use crate::services::Teller;

const MENU_OPTIONS: &str = "Choose an option:\n\
                            1. Deposit\n\
                            2. Withdraw\n\
                            3. View balance and history\n\
                            4. Exit";

/// Whether the session keeps going after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu action selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Deposit,
    Withdraw,
    Show,
    Exit,
}

impl Choice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().parse::<u32>().ok()? {
            1 => Some(Self::Deposit),
            2 => Some(Self::Withdraw),
            3 => Some(Self::Show),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run a full interactive session
///
/// Greets the user, asks for the account holder's name unless `name` is
/// given, opens the account and loops over the menu until the user picks
/// "Exit" or the input ends.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    settings: &Settings,
    name: Option<String>,
    audit: Option<AuditLogger>,
) -> PassbookResult<()> {
    let mut session = Session {
        input,
        output,
        settings,
    };

    writeln!(session.output, "Welcome to Passbook!")?;

    let name = match name {
        Some(name) => name,
        None => match session.prompt("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let mut teller = Teller::from_settings(&name, settings, audit)?;
    session.run(&mut teller)
}

struct Session<'a, R, W> {
    input: R,
    output: W,
    settings: &'a Settings,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self, teller: &mut Teller) -> PassbookResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Welcome, {}!", teller.account().name())?;
            writeln!(self.output, "{}", MENU_OPTIONS)?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let flow = match Choice::parse(&line) {
                Some(Choice::Deposit) => self.deposit(teller)?,
                Some(Choice::Withdraw) => self.withdraw(teller)?,
                Some(Choice::Show) => self.show(teller)?,
                Some(Choice::Exit) => {
                    writeln!(self.output, "Thank you for using Passbook. Goodbye!")?;
                    Flow::Quit
                }
                None => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn deposit(&mut self, teller: &mut Teller) -> PassbookResult<Flow> {
        let Some((amount, note)) = self.read_operation("deposit", "deposit")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = amount else {
            return Ok(Flow::Continue);
        };

        let shown = self.money(amount);
        match teller.deposit(amount, &note) {
            Ok(_) => writeln!(self.output, "Deposit of {} completed successfully!", shown)?,
            Err(e) if e.is_validation() => writeln!(self.output, "Deposit failed: {}", e)?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self, teller: &mut Teller) -> PassbookResult<Flow> {
        let Some((amount, note)) = self.read_operation("withdraw", "withdrawal")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = amount else {
            return Ok(Flow::Continue);
        };

        let shown = self.money(amount);
        match teller.withdraw(amount, &note) {
            Ok(_) => writeln!(self.output, "Withdrawal of {} completed successfully!", shown)?,
            Err(e) if e.is_insufficient_funds() || e.is_validation() => {
                writeln!(self.output, "Withdrawal failed: {}", e)?
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, teller: &Teller) -> PassbookResult<Flow> {
        writeln!(
            self.output,
            "{}",
            format_balance(teller.balance(), self.settings)
        )?;
        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            format_history(teller.history(), self.settings)
        )?;
        Ok(Flow::Continue)
    }

    /// Ask for an amount to `verb`, then a note for the `label`
    ///
    /// `None` means the input ended. An unparseable amount is reported
    /// and yields `Some((None, _))` without asking for the note.
    fn read_operation(
        &mut self,
        verb: &str,
        label: &str,
    ) -> PassbookResult<Option<(Option<Money>, String)>> {
        let Some(raw) = self.prompt(&format!("Enter the amount to {}: ", verb))? else {
            return Ok(None);
        };

        let Ok(amount) = Money::parse(&raw) else {
            writeln!(self.output, "Invalid amount. Try again.")?;
            return Ok(Some((None, String::new())));
        };

        let Some(note) = self.prompt(&format!("Enter a note for the {}: ", label))? else {
            return Ok(None);
        };

        Ok(Some((Some(amount), note)))
    }

    fn prompt(&mut self, text: &str) -> PassbookResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> PassbookResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }
}
