use apriori::{Format, Itemset, ItemsetMiner, apriori::AprioriRunner, table::encode};
use tester::test_utils::{ITEM_LIST, Solved, load, test_generic};

#[test]
fn test_apriori() {
    for support in [0.05, 0.1, 0.25, 0.5] {
        test_generic("../../test_files", support, |t, s| {
            Solved::from(AprioriRunner::new().mine(t, s))
        });
    }
}
#[test]
fn test_apriori_item_list() {
    let data = load("../../test_files", ITEM_LIST, Format::ItemList);
    let (table, size, items) = encode(&data);
    assert_eq!(size, 10);
    assert_eq!(items, 7);
    let found = Solved::from(AprioriRunner::new().mine(&table, 0.2));
    assert_eq!(found, Solved::brute_force(&table, 0.2));
    let milk = data.universe.column("whole milk").unwrap();
    assert!(found.set.contains(&Itemset::from([milk])));
}
