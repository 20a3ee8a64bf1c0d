use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::aggregate;
use crate::config::Config;
use crate::models::{month_name, parse_amount, parse_int, NewRemittance, INVALID_MONTH};
use crate::report;
use crate::store::{RecordStore, UpsertOutcome};
use crate::ui::chart::{self, ChartData};

const MENU_ITEMS: [&str; 6] = [
    "Add a remittance record",
    "View all records",
    "Visualize remittance data",
    "Export data to PDF",
    "Analyze data",
    "Exit",
];

pub(crate) type ChartViewer = fn(&ChartData) -> Result<()>;

enum Flow {
    Continue,
    Exit,
}

pub(crate) fn as_menu(store: &RecordStore, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        io::stdout(),
        store,
        &config.report_path,
        chart::show,
    );
    menu.run()
}

/// The numbered interactive menu, reading answers line by line from `input`.
pub(crate) struct Menu<'a, R, W> {
    input: R,
    output: W,
    store: &'a RecordStore,
    report_path: &'a Path,
    show_chart: ChartViewer,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(crate) fn new(
        input: R,
        output: W,
        store: &'a RecordStore,
        report_path: &'a Path,
        show_chart: ChartViewer,
    ) -> Self {
        Self {
            input,
            output,
            store,
            report_path,
            show_chart,
        }
    }

    /// Loop until the user exits or input runs out. A failing action is
    /// reported and the menu is shown again.
    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) => {
                    log::warn!("Menu action failed: {e:#}");
                    writeln!(self.output, "Error: {e:#}")?;
                }
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add_record()?,
            "2" => self.view_records()?,
            "3" => self.visualize()?,
            "4" => self.export_pdf()?,
            "5" => self.analyze()?,
            "6" => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.output, "Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Remittance Tracker ---")?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {item}", i + 1)?;
        }
        Ok(())
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn answer(&mut self, message: &str) -> Result<String> {
        self.prompt(message)?
            .ok_or_else(|| anyhow::anyhow!("Input ended before the answer to '{}'", message.trim()))
    }

    fn add_record(&mut self) -> Result<()> {
        let year = parse_int(&self.answer("Enter the year: ")?, "year")?;
        let month = parse_int(&self.answer("Enter the month (1-12): ")?, "month")?;
        if month_name(month) == INVALID_MONTH {
            writeln!(
                self.output,
                "Note: month {month} is outside 1-12 and will show as '{INVALID_MONTH}'."
            )?;
        }
        let amount = parse_amount(&self.answer("Enter the remittance amount: ")?)?;
        let purpose = self.answer("Enter the purpose: ")?;

        match self.store.add(NewRemittance::new(year, month, amount, purpose))? {
            UpsertOutcome::Added => writeln!(self.output, "Record added successfully!")?,
            UpsertOutcome::Updated => writeln!(self.output, "Amount updated successfully!")?,
        }
        Ok(())
    }

    fn view_records(&mut self) -> Result<()> {
        let records = self.store.load()?;
        if records.is_empty() {
            writeln!(self.output, "No records found.")?;
            return Ok(());
        }
        let sorted = aggregate::sorted_by_period(&records);
        write!(self.output, "{}", report::render_table(&sorted))?;
        Ok(())
    }

    fn visualize(&mut self) -> Result<()> {
        let records = self.store.load()?;
        if records.is_empty() {
            writeln!(self.output, "No records found.")?;
            return Ok(());
        }

        writeln!(self.output, "Choose an option to visualize:")?;
        writeln!(self.output, "1. Yearly remittance")?;
        writeln!(self.output, "2. Monthly remittance for a specific year")?;
        let choice = self.answer("Enter your choice (1/2): ")?;

        let chart = match choice.trim() {
            "1" => chart::yearly_chart(&aggregate::by_year(&records)),
            "2" => {
                let year = parse_int(
                    &self.answer("Enter the year for monthly visualization: ")?,
                    "year",
                )?;
                match chart::monthly_chart(year, &aggregate::by_month(&records, year)) {
                    Some(chart) => chart,
                    None => {
                        writeln!(self.output, "No data found for the year {year}.")?;
                        return Ok(());
                    }
                }
            }
            _ => {
                writeln!(self.output, "Invalid choice. Please select either 1 or 2.")?;
                return Ok(());
            }
        };
        (self.show_chart)(&chart)
    }

    fn export_pdf(&mut self) -> Result<()> {
        let records = self.store.load()?;
        let Some(summary) = aggregate::total_and_max(&records) else {
            writeln!(self.output, "No records found.")?;
            return Ok(());
        };
        let sorted = aggregate::sorted_by_period(&records);
        report::export_pdf(&sorted, &summary, self.report_path)?;
        writeln!(
            self.output,
            "Data exported to {} successfully!",
            self.report_path.display()
        )?;
        Ok(())
    }

    fn analyze(&mut self) -> Result<()> {
        let records = self.store.load()?;
        let Some(summary) = aggregate::total_and_max(&records) else {
            writeln!(self.output, "No records found.")?;
            return Ok(());
        };
        for line in report::analysis_lines(&summary) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
