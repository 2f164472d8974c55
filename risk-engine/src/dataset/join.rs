//! Training dataset builder
//!
//! Left-joins every raw transaction with the feature row of its origin
//! and of its destination account. Raw columns pass through untouched;
//! the joined columns are appended as `src_*` then `dst_*`. A missing
//! feature row yields empty cells, never a dropped transaction.

use std::collections::HashMap;
use std::io::{Read, Write};

use csv::StringRecord;

use crate::error::{EngineError, EngineResult};

pub const ORIGIN_COLUMN: &str = "nameOrig";
pub const DESTINATION_COLUMN: &str = "nameDest";

const JOINED_COUNT: usize = 4;
/// Feature columns carried over from the account file, in output order
const JOINED_FEATURES: [&str; JOINED_COUNT] = ["pagerank", "degree", "betweenness", "community"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub transactions: usize,
    pub origin_matched: usize,
    pub destination_matched: usize,
    pub duplicate_accounts: usize,
}

/// Raw feature cells keyed by account id
struct FeatureIndex {
    cells: HashMap<String, [String; JOINED_COUNT]>,
    duplicates: usize,
}

impl FeatureIndex {
    fn read<R: Read>(reader: R) -> EngineResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let id_col = column_index(&headers, "id")
            .ok_or_else(|| EngineError::Dataset("account features have no `id` column".to_string()))?;
        let feature_cols: Vec<Option<usize>> = JOINED_FEATURES
            .iter()
            .map(|name| column_index(&headers, name))
            .collect();

        let mut cells = HashMap::new();
        let mut duplicates = 0;

        for record in csv_reader.records() {
            let record = record?;
            let id = record.get(id_col).unwrap_or_default().to_string();

            let values: [String; JOINED_COUNT] = std::array::from_fn(|i| {
                feature_cols[i]
                    .and_then(|col| record.get(col))
                    .unwrap_or_default()
                    .to_string()
            });

            if cells.contains_key(&id) {
                duplicates += 1;
                continue;
            }
            cells.insert(id, values);
        }

        Ok(Self { cells, duplicates })
    }

    fn get(&self, id: &str) -> Option<&[String; JOINED_COUNT]> {
        self.cells.get(id)
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn joined_headers(prefix: &str) -> impl Iterator<Item = String> + '_ {
    JOINED_FEATURES.iter().map(move |name| format!("{}_{}", prefix, name))
}

/// Join `transactions` with `features` on both endpoints and write to `out`
pub fn build_training_dataset<T, F, W>(transactions: T, features: F, out: W) -> EngineResult<JoinStats>
where
    T: Read,
    F: Read,
    W: Write,
{
    let index = FeatureIndex::read(features)?;
    if index.duplicates > 0 {
        log::warn!("{} duplicate account ids in feature file, keeping first", index.duplicates);
    }

    let mut tx_reader = csv::Reader::from_reader(transactions);
    let tx_headers = tx_reader.headers()?.clone();

    let origin_col = column_index(&tx_headers, ORIGIN_COLUMN).ok_or_else(|| {
        EngineError::Dataset(format!("transactions have no `{}` column", ORIGIN_COLUMN))
    })?;
    let dest_col = column_index(&tx_headers, DESTINATION_COLUMN).ok_or_else(|| {
        EngineError::Dataset(format!("transactions have no `{}` column", DESTINATION_COLUMN))
    })?;

    let mut writer = csv::Writer::from_writer(out);
    let mut header: Vec<String> = tx_headers.iter().map(str::to_string).collect();
    header.extend(joined_headers("src"));
    header.extend(joined_headers("dst"));
    writer.write_record(&header)?;

    let empty: [String; JOINED_COUNT] = Default::default();
    let mut stats = JoinStats {
        duplicate_accounts: index.duplicates,
        ..JoinStats::default()
    };

    for record in tx_reader.records() {
        let record = record?;
        let origin = index.get(record.get(origin_col).unwrap_or_default());
        let destination = index.get(record.get(dest_col).unwrap_or_default());

        stats.transactions += 1;
        stats.origin_matched += usize::from(origin.is_some());
        stats.destination_matched += usize::from(destination.is_some());

        let mut row: Vec<&str> = record.iter().collect();
        row.extend(origin.unwrap_or(&empty).iter().map(String::as_str));
        row.extend(destination.unwrap_or(&empty).iter().map(String::as_str));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSACTIONS: &str = "\
step,type,amount,nameOrig,nameDest,isFraud
1,TRANSFER,181.0,C1305486145,C553264065,1
1,PAYMENT,9839.64,C1231006815,M1979787155,0
2,CASH_OUT,229133.94,C905080434,C476402209,0
";

    const FEATURES: &str = "\
id,pagerank,degree,betweenness,community
C1305486145,0.42,2,0.1,3
C553264065,0.9,12,0.5,3
C1231006815,0.15,1,0.0,
";

    fn run() -> (JoinStats, Vec<Vec<String>>) {
        let mut out = Vec::new();
        let stats = build_training_dataset(TRANSACTIONS.as_bytes(), FEATURES.as_bytes(), &mut out).unwrap();
        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(out.as_slice());
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        (stats, rows)
    }

    #[test]
    fn test_header_appends_src_then_dst() {
        let (_, rows) = run();
        assert_eq!(
            rows[0],
            vec![
                "step", "type", "amount", "nameOrig", "nameDest", "isFraud",
                "src_pagerank", "src_degree", "src_betweenness", "src_community",
                "dst_pagerank", "dst_degree", "dst_betweenness", "dst_community",
            ]
        );
    }

    #[test]
    fn test_matched_rows_carry_both_sides() {
        let (_, rows) = run();
        assert_eq!(&rows[1][6..], &["0.42", "2", "0.1", "3", "0.9", "12", "0.5", "3"]);
    }

    #[test]
    fn test_left_join_keeps_unmatched_transactions() {
        let (stats, rows) = run();

        assert_eq!(rows.len(), 4);
        assert_eq!(stats.transactions, 3);
        assert_eq!(stats.origin_matched, 2);
        assert_eq!(stats.destination_matched, 1);

        // origin known, merchant destination unknown
        assert_eq!(&rows[2][3..5], &["C1231006815", "M1979787155"]);
        assert_eq!(&rows[2][6..10], &["0.15", "1", "0.0", ""]);
        assert!(rows[2][10..].iter().all(String::is_empty));

        // neither side known
        assert!(rows[3][6..].iter().all(String::is_empty));
    }

    #[test]
    fn test_missing_key_column_is_an_error() {
        let mut out = Vec::new();
        let result = build_training_dataset("a,b\n1,2\n".as_bytes(), FEATURES.as_bytes(), &mut out);
        assert!(matches!(result, Err(EngineError::Dataset(_))));
    }

    #[test]
    fn test_duplicate_accounts_keep_first() {
        let features = "id,pagerank,degree,betweenness,community\nC1,0.1,1,0,1\nC1,0.9,9,9,9\n";
        let transactions = "nameOrig,nameDest\nC1,C2\n";
        let mut out = Vec::new();

        let stats = build_training_dataset(transactions.as_bytes(), features.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(stats.duplicate_accounts, 1);
        assert!(text.lines().nth(1).unwrap().starts_with("C1,C2,0.1,1,0,1"));
    }
}
