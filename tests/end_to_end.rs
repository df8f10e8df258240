//! Black-box tests against the public API, in the style of the teacher's
//! `tests/full-table.rs` and `tests/more-specifics.rs`: build a table, run
//! a batch of queries, check the tags.

use lpm::{load_table, run_query_loop, LpmTable};

const TABLE: &str = "\
10.0.0.0/8       100
10.1.0.0/16      101
10.1.2.0/24      102
192.168.0.0/16   200
2001:db8::/32    600
2001:db8:1::/48  601
";

#[test]
fn spec_scenario_end_to_end() {
    let table: LpmTable<i64> = load_table(TABLE).unwrap();

    let input = "\
10.1.2.3
10.1.3.4
10.2.0.1
11.0.0.1
192.168.1.1
2001:db8:1::1
2001:db8:2::1
2002::1
";
    let mut out = Vec::new();
    run_query_loop(&table, input.as_bytes(), &mut out).unwrap();

    let expected = "102\n101\n100\n-\n200\n601\n600\n-\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn more_specific_inserted_after_less_specific_wins() {
    let mut table: LpmTable<i64> = LpmTable::new();
    table.insert(lpm::parse_prefix("172.16.0.0", 12).unwrap(), 1);
    table.insert(lpm::parse_prefix("172.16.5.0", 24).unwrap(), 2);

    let mut out = Vec::new();
    run_query_loop(&table, "172.16.5.1\n172.16.9.9\n".as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2\n1\n");
}

#[test]
fn less_specific_survives_removal_is_not_yet_supported_but_replacement_is() {
    let mut table: LpmTable<i64> = LpmTable::new();
    table.insert(lpm::parse_prefix("10.0.0.0", 8).unwrap(), 1);
    table.insert(lpm::parse_prefix("10.0.0.0", 8).unwrap(), 2);

    let mut out = Vec::new();
    run_query_loop(&table, "10.1.1.1\n".as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2\n");
}

#[test]
fn unknown_address_yields_sentinel() {
    let table: LpmTable<i64> = load_table("10.0.0.0/8 1\n").unwrap();
    let mut out = Vec::new();
    run_query_loop(&table, "203.0.113.1\n".as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "-\n");
}
