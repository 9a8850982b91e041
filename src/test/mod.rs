mod iter;
#[cfg(feature = "parking_lot")]
mod shared;

use std::fmt::Debug;

use simplelog::{Config, LevelFilter, TestLogger};

use crate::prelude::*;

fn init_logging() {
    // several tests race to install the logger, only the first one wins
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn validate_rb_tree<K, V>(map: &SortedMap<K, V>) -> usize
    where K: Ord + Debug, V: Debug
{
    match map.validate() {
        Ok(black_height) => black_height,
        Err(violation) => panic!("{violation}\n{}", map.display()),
    }
}

#[allow(unused)]
fn print_tree<K, V>(map: &SortedMap<K, V>)
    where K: Debug, V: Debug
{
    print!("{}", map.display());
}

fn keys<K: Clone, V>(map: &mut SortedMap<K, V>) -> Vec<K> {
    map.forward_iter().map( |(k, _)| k.clone() ).collect()
}

fn keys_rev<K: Clone, V>(map: &mut SortedMap<K, V>) -> Vec<K> {
    map.backward_iter().map( |(k, _)| k.clone() ).collect()
}
