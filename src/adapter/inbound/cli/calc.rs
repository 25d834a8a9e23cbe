//! Handler for the `calc` command.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::CalcArgs;
use crate::adapter::inbound::cli::output;
use crate::application::CompensationReport;
use crate::domain::form::{FieldId, FormFields};
use crate::domain::money::{format_amount, format_money, format_thousands, Amount, USD};
use crate::domain::sensitivity::SensitivityPoint;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct SensitivityRow {
    #[tabled(rename = "Stock price")]
    price: String,
    #[tabled(rename = "RSUs / yr")]
    rsu: String,
    #[tabled(rename = "ESOs / yr")]
    eso: String,
    #[tabled(rename = "Total / yr")]
    total: String,
}

impl SensitivityRow {
    fn new(point: &SensitivityPoint, currency: &str) -> Self {
        Self {
            price: format_money(point.stock_price, USD, 0),
            rsu: format_thousands(point.rsu_per_year, currency),
            eso: format_thousands(point.eso_per_year, currency),
            total: format_thousands(point.total_per_year, currency),
        }
    }
}

/// Execute the calc command.
pub async fn execute(args: &CalcArgs, config: &Config) -> Result<()> {
    let fields = args.fields();
    let service = bootstrap::build_compensation_service(config);

    let pb = output::spinner("Calculating compensation");
    let report = match service.calculate(&fields, args.chart).await {
        Ok(report) => {
            output::spinner_success(&pb, "Calculated");
            report
        }
        Err(err) => {
            output::spinner_fail(&pb);
            return Err(err.into());
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "type": "report",
            "payload": serde_json::to_value(&report)?,
        }));
        return Ok(());
    }

    if output::verbosity() > 0 {
        print_inputs(&fields);
    }
    print_report(&report);
    Ok(())
}

fn print_inputs(fields: &FormFields) {
    output::section("Inputs");
    for id in FieldId::ALL {
        output::field(id.label(), fields.get(id));
    }
}

fn print_report(report: &CompensationReport) {
    let currency = report.currency.as_str();
    let money = |amount: Amount| format_amount(amount, currency);
    let out = &report.output;

    output::section("Stock");
    if let Some(symbol) = &report.symbol {
        output::field("Symbol", symbol);
    }
    output::field("Price", format_amount(report.stock_price, USD));
    if currency != USD {
        output::field("Rate", format!("1 {USD} = {} {currency}", report.currency_rate));
    }

    output::section("Per month");
    output::field("RSUs", money(out.rsu_value_per_month));
    output::field("ESOs", money(out.eso_value_per_month));
    output::field("Total", output::highlight(money(out.per_month)));

    output::section("Per year");
    output::field("RSUs", money(out.rsu_value_per_year));
    output::field("ESOs", money(out.eso_value_per_year));
    output::field("Total", output::highlight(money(out.per_year)));

    if let Some(series) = &report.series {
        output::section("Sensitivity");
        let rows: Vec<SensitivityRow> = series
            .iter()
            .map(|point| SensitivityRow::new(point, currency))
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        output::lines(&table.to_string());
    }

    output::section("Share");
    output::note(&format!("?{}", report.query));
}
