pub mod apriori;
pub mod itemset;
pub mod start;
pub mod table;
pub mod transaction_set;
pub mod trie;

pub use itemset::Itemset;
pub use start::ItemsetMiner;
pub use table::PresenceTable;
pub use transaction_set::{Format, ItemUniverse, LoadError, TransactionSet};
