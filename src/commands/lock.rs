//! `vault-hooks lock` handlers.

use super::resolve_vault_dir;
use crate::cli::{LockClearArgs, LockShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::locks::{self, LOCK_TIMEOUT, LockInfo};
use std::path::Path;

pub(super) fn cmd_lock_show(config: &Config, args: LockShowArgs) -> Result<()> {
    let dir = resolve_vault_dir(config, args.dir.as_deref())?;
    let lock_path = locks::lock_path_for(&dir);

    match locks::inspect(&lock_path)? {
        None => {
            println!("No sync lock held for {}.", dir.display());
            println!("  Path:       {}", lock_path.display());
        }
        Some(info) => {
            println!("Sync lock for {}:", dir.display());
            print_lock_details(&info, &lock_path);
            if info.is_stale {
                println!();
                println!(
                    "Note: the lock is stale and will be reclaimed by the next sync, \
                     or clear it now with `vault-hooks lock clear`."
                );
            }
        }
    }

    Ok(())
}

pub(super) fn cmd_lock_clear(config: &Config, args: LockClearArgs) -> Result<()> {
    let dir = resolve_vault_dir(config, args.dir.as_deref())?;
    let lock_path = locks::lock_path_for(&dir);

    let cleared = locks::clear(&lock_path, args.force)?;

    println!("Cleared sync lock for {}.", dir.display());
    println!();
    print_lock_details(&cleared, &lock_path);

    Ok(())
}

fn print_lock_details(info: &LockInfo, lock_path: &Path) {
    match &info.metadata {
        Some(meta) => {
            println!("  Owner:      {}", meta.owner);
            if let Some(pid) = meta.pid {
                println!("  PID:        {}", pid);
            }
            println!(
                "  Created:    {}",
                meta.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        None => println!("  Owner:      unknown"),
    }
    println!("  Age:        {}", info.age_string());
    if info.is_stale {
        println!(
            "  Status:     STALE (exceeds {} min timeout)",
            LOCK_TIMEOUT.as_secs() / 60
        );
    }
    println!("  Path:       {}", lock_path.display());
}
