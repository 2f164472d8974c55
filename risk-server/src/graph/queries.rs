//! Cypher queries
//!
//! Graph model: `(:Account {id, pagerank, degree, betweenness, community})`
//! connected by `[:TRANSFER {amount, type, step, isFraud}]`.
//! Numeric properties are coerced in Cypher so integer/float/boolean
//! storage differences never reach the row decoder.

use super::HopDepth;
use crate::models::TransactionKind;

pub const ACCOUNT_FEATURES: &str = r#"
MATCH (a:Account {id: $id})
RETURN toFloat(a.pagerank) AS pagerank,
       toInteger(a.degree) AS degree,
       toFloat(a.betweenness) AS betweenness
"#;

const ACCOUNT_COLUMNS: &str = r#"
RETURN a.id AS id,
       toFloat(a.pagerank) AS pagerank,
       toInteger(a.degree) AS degree,
       toFloat(a.betweenness) AS betweenness,
       toInteger(a.community) AS community
"#;

const TRANSACTION_COLUMNS: &str = r#"
RETURN a.id AS nameOrig,
       b.id AS nameDest,
       toFloat(t.amount) AS amount,
       t.type AS type,
       toInteger(t.step) AS step,
       toInteger(t.isFraud) AS isFraud
"#;

const EDGE_COLUMNS: &str = r#"
RETURN a.id AS source_id,
       toFloat(a.pagerank) AS source_pagerank,
       toInteger(a.degree) AS source_degree,
       toInteger(a.community) AS source_community,
       b.id AS target_id,
       toFloat(b.pagerank) AS target_pagerank,
       toInteger(b.degree) AS target_degree,
       toInteger(b.community) AS target_community,
       toFloat(t.amount) AS amount,
       toInteger(t.isFraud) AS is_fraud
"#;

pub const PING: &str = "RETURN 1 AS ok";

pub fn sample_accounts() -> String {
    format!("MATCH (a:Account) {} LIMIT $limit", ACCOUNT_COLUMNS)
}

pub fn export_accounts() -> String {
    format!("MATCH (a:Account) {}", ACCOUNT_COLUMNS)
}

pub fn sample_transactions(kind: TransactionKind) -> String {
    let filter = match kind {
        TransactionKind::Any => "",
        TransactionKind::Fraud => "WHERE toInteger(t.isFraud) = 1",
        TransactionKind::Normal => "WHERE coalesce(toInteger(t.isFraud), 0) = 0",
    };
    format!(
        "MATCH (a:Account)-[t:TRANSFER]->(b:Account) {} {} LIMIT $limit",
        filter, TRANSACTION_COLUMNS
    )
}

pub fn network() -> String {
    format!("MATCH (a:Account)-[t:TRANSFER]->(b:Account) {} LIMIT $limit", EDGE_COLUMNS)
}

pub fn fraud_network() -> String {
    format!(
        "MATCH (a:Account)-[t:TRANSFER]->(b:Account) WHERE toInteger(t.isFraud) = 1 {} LIMIT $limit",
        EDGE_COLUMNS
    )
}

pub fn account_network(depth: HopDepth) -> String {
    format!(
        r#"
MATCH p = (c:Account {{id: $id}})-[:TRANSFER*1..{depth}]-(:Account)
UNWIND relationships(p) AS t
WITH DISTINCT t
LIMIT $limit
WITH t, startNode(t) AS a, endNode(t) AS b
{columns}
"#,
        depth = depth.get(),
        columns = EDGE_COLUMNS
    )
}
