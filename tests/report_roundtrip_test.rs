use green_savings::core::report::{render_report, REPORT_HEADER};
use green_savings::core::{HorizonValues, SavingsResult};

fn sample_results(n: usize) -> Vec<SavingsResult> {
    (0..n)
        .map(|i| {
            let base = 1.0 + i as f64 * 3.7;
            SavingsResult {
                co2_absorbed: base,
                thermal_flux_w: base * 100.0,
                energy_kwh: HorizonValues {
                    daily: base * 0.024,
                    monthly: base * 0.732,
                    yearly: base * 8.766,
                },
                cost_chf: HorizonValues {
                    daily: base * 0.00696,
                    monthly: base * 0.21228,
                    yearly: base * 2.54214,
                },
                co2_avoided_kg: HorizonValues {
                    daily: base * 0.0006,
                    monthly: base * 0.0183,
                    yearly: base * 0.219_15,
                },
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap()
}

#[test]
fn written_table_reparses_to_the_same_values() {
    let results = sample_results(5);
    let report = render_report(&results).unwrap();

    let mut reader = csv::Reader::from_reader(report.as_bytes());
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        REPORT_HEADER.to_vec()
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), results.len());

    for (i, (row, result)) in rows.iter().zip(results.iter()).enumerate() {
        assert_eq!(row.get(0).unwrap(), (i + 1).to_string());

        let expected = [
            result.co2_avoided_kg.daily,
            result.co2_avoided_kg.monthly,
            result.co2_avoided_kg.yearly,
            result.cost_chf.daily,
            result.cost_chf.monthly,
            result.cost_chf.yearly,
        ];
        for (column, value) in expected.iter().enumerate() {
            let parsed: f64 = row.get(column + 1).unwrap().parse().unwrap();
            assert_eq!(parsed, round2(*value));
        }
    }
}

#[test]
fn empty_result_set_yields_a_header_only_table() {
    let report = render_report(&[]).unwrap();
    let mut reader = csv::Reader::from_reader(report.as_bytes());
    assert!(reader.headers().is_ok());
    assert_eq!(reader.records().count(), 0);
}
