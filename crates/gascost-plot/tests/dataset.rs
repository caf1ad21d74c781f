// File: crates/gascost-plot/tests/dataset.rs
// Purpose: CSV parsing by header name, file order, and malformed-input classification.

use std::path::Path;

use gascost_plot::{Dataset, PlotError, Record};

fn parse(csv: &str) -> Result<Dataset, PlotError> {
    Dataset::from_reader(csv.as_bytes(), Path::new("gascosts.csv"))
}

#[test]
fn parses_rows_in_file_order() {
    let ds = parse("bidNumber,batchAuctionCost,multiRaffleCost\n1,21000,18000\n2,40000,30000\n").expect("parse");
    assert_eq!(
        ds.records(),
        &[
            Record { bid_number: 1, auction_cost: 21000, raffle_cost: 18000 },
            Record { bid_number: 2, auction_cost: 40000, raffle_cost: 30000 },
        ]
    );
    assert_eq!(ds.bid_numbers(), vec![1.0, 2.0]);
    assert_eq!(ds.auction_costs(), vec![21000.0, 40000.0]);
    assert_eq!(ds.raffle_costs(), vec![18000.0, 30000.0]);
}

#[test]
fn column_order_and_extra_columns_do_not_matter() {
    let ds = parse("note,multiRaffleCost,bidNumber,batchAuctionCost\nx,18000,1,21000\ny,30000,2,40000\n").expect("parse");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[1], Record { bid_number: 2, auction_cost: 40000, raffle_cost: 30000 });
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let ds = parse("bidNumber, batchAuctionCost ,multiRaffleCost\n 5 , 100 ,+90\n").expect("parse");
    assert_eq!(ds.records(), &[Record { bid_number: 5, auction_cost: 100, raffle_cost: 90 }]);
}

#[test]
fn duplicates_and_unsorted_bids_are_kept_as_is() {
    let ds = parse("bidNumber,batchAuctionCost,multiRaffleCost\n10,3,4\n5,1,2\n10,7,8\n").expect("parse");
    assert_eq!(ds.bid_numbers(), vec![10.0, 5.0, 10.0]);
}

#[test]
fn header_only_is_an_empty_dataset() {
    let ds = parse("bidNumber,batchAuctionCost,multiRaffleCost\n").expect("parse");
    assert!(ds.is_empty());
}

#[test]
fn missing_column_is_malformed() {
    let err = parse("bidNumber,batchAuctionCost\n1,21000\n").unwrap_err();
    match err {
        PlotError::MalformedRecord { line, reason, .. } => {
            assert_eq!(line, Some(1));
            assert!(reason.contains("multiRaffleCost"), "{reason}");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn missing_column_is_malformed_even_without_rows() {
    let err = parse("bidNumber,multiRaffleCost\n").unwrap_err();
    assert!(matches!(err, PlotError::MalformedRecord { .. }));
}

#[test]
fn non_integer_value_is_malformed_with_line() {
    let err = parse("bidNumber,batchAuctionCost,multiRaffleCost\n1,21000,18000\n2,4e4,30000\n").unwrap_err();
    match err {
        PlotError::MalformedRecord { line, .. } => assert_eq!(line, Some(3)),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
    let msg = parse("bidNumber,batchAuctionCost,multiRaffleCost\n1,,5\n").unwrap_err().to_string();
    assert!(msg.starts_with("malformed record in gascosts.csv (line 2)"), "{msg}");
}

#[test]
fn missing_file_is_input_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Dataset::load(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, PlotError::InputNotFound { .. }), "{err:?}");
}
