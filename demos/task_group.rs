//! Fan work out over a task group and let the first failure win.
//!
//! Run with: `cargo run --example task_group --features async-tokio`

use std::time::Duration;

use app_error::prelude_async::*;

async fn reindex_shard(shard: u32) -> AppResult<()> {
    tokio::time::sleep(Duration::from_millis(10 * u64::from(shard))).await;
    ensure!(shard != 3, StatusCode::ServiceUnavailable, "shard {shard} is offline");
    println!("shard {shard} reindexed");
    Ok(())
}

#[tokio::main]
async fn main() {
    let mut group = TaskGroup::new();
    for shard in 0..6 {
        group.spawn(async move { reindex_shard(shard).await });
    }

    match with_timeout(Duration::from_secs(5), group.wait()).await {
        Ok(()) => println!("all shards reindexed"),
        Err(err) => {
            println!("reindex aborted: {err}");
            println!("{}", err.error_stack());
        }
    }
}
