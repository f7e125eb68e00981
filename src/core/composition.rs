use crate::domain::model::Composition;
use crate::utils::error::Result;

/// Aggregates one grid file into one composition. Every field of every
/// record is a 1-based plant-index token; each in-range token adds one
/// cell to that plant's surface bucket. Out-of-range or unparseable
/// tokens are reported and dropped. One call never merges files.
pub fn aggregate(label: &str, data: &[u8], catalog_size: usize) -> Result<Composition> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut surface_by_plant = vec![0.0; catalog_size];
    let mut counted = 0usize;
    let mut rejected = 0usize;

    for record in reader.records() {
        let record = record?;
        for token in record.iter() {
            match token.parse::<usize>() {
                Ok(index) if (1..=catalog_size).contains(&index) => {
                    surface_by_plant[index - 1] += 1.0;
                    counted += 1;
                }
                _ => {
                    tracing::warn!("Invalid plant type '{}' in file {}", token, label);
                    rejected += 1;
                }
            }
        }
    }

    tracing::info!(
        "File {}: {} cells aggregated, {} tokens rejected",
        label,
        counted,
        rejected
    );

    Ok(Composition {
        label: label.to_string(),
        surface_by_plant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_tokens_into_plant_buckets() {
        let composition = aggregate("matrice_1.csv", b"1,2\n1,3\n", 3).unwrap();
        assert_eq!(composition.surface_by_plant, vec![2.0, 1.0, 1.0]);
        assert_eq!(composition.total_cells(), 4.0);
    }

    #[test]
    fn out_of_range_tokens_are_dropped() {
        // 0 and 4 fall outside a catalogue of size 3 and touch no bucket.
        let composition = aggregate("matrice_1.csv", b"1,0\n4,2\n", 3).unwrap();
        assert_eq!(composition.surface_by_plant, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn unparseable_tokens_are_dropped() {
        let composition = aggregate("matrice_1.csv", b"1,x\n-2,3\n", 3).unwrap();
        assert_eq!(composition.surface_by_plant, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn empty_file_yields_zero_vector() {
        let composition = aggregate("matrice_1.csv", b"", 4).unwrap();
        assert_eq!(composition.surface_by_plant, vec![0.0; 4]);
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let composition = aggregate("matrice_1.csv", b"1\n2,2,2\n3,1\n", 3).unwrap();
        assert_eq!(composition.surface_by_plant, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn files_aggregate_independently() {
        let first = aggregate("matrice_1.csv", b"1,1\n", 2).unwrap();
        let second = aggregate("matrice_2.csv", b"2\n", 2).unwrap();

        assert_eq!(first.surface_by_plant, vec![2.0, 0.0]);
        assert_eq!(second.surface_by_plant, vec![0.0, 1.0]);
    }
}
