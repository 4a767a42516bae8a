use std::{sync::Arc, thread};

use gdi32::{Config, Export, Gdi32, Preload};

fn main() {
    let config = Config {
        preload: Preload::Only(vec![Export::GdiGetBatchLimit, Export::GetStockObject]),
        ..Config::default()
    };

    let gdi = match Gdi32::new(&config) {
        Ok(gdi) => Arc::new(gdi),
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("preloaded: {:?}", gdi.resolved());

    let limit = unsafe { gdi.GdiGetBatchLimit() }.unwrap();
    println!("batch limit: {limit}");

    // Stock objects are owned by the system; nothing to delete.
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let gdi = gdi.clone();
            thread::spawn(move || unsafe { gdi.GetStockObject(i) }.map(|object| object as usize))
        })
        .collect();

    for (i, worker) in workers.into_iter().enumerate() {
        match worker.join().unwrap() {
            Ok(object) => println!("stock object {i}: {object:#x}"),
            Err(e) => println!("stock object {i}: {e}"),
        }
    }

    match gdi.resolve_all() {
        Ok(installed) => println!(
            "resolved {} more exports, {} of {} bound",
            installed.len(),
            gdi.resolved().len(),
            Export::COUNT
        ),
        Err(e) => println!("{e}"),
    }

    for export in [Export::BitBlt, Export::GdiAlphaBlend, Export::EnumObjects] {
        println!("{}", export.descriptor());
    }
}
