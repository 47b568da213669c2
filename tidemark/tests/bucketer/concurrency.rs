use std::sync::Arc;

use tidemark::{BucketSize, Bucketer};

use crate::helpers::MockSource;

const fn assert_send_sync<T: Send + Sync>() {}
const _: () = assert_send_sync::<Bucketer>();

#[test]
fn shared_bucketer_gives_identical_results_across_threads() {
    let src = MockSource::new();
    let revenue = Arc::new(src.series("revenue").unwrap());
    let b = Arc::new(
        Bucketer::builder()
            .bucket_size(BucketSize::Week)
            .build()
            .unwrap(),
    );
    let expected = b.aggregate(&revenue).unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let b = Arc::clone(&b);
                let revenue = Arc::clone(&revenue);
                scope.spawn(move || b.aggregate(&revenue).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for r in results {
        assert_eq!(r, expected);
    }
}
