//! Benchmarks for the message rendering pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use prepbot::chat::Message;
use prepbot::render::{clean_message_text, render_message, CopyIndicator, RenderContext};
use tokio::time::Instant;

const ANSWER: &str = r#"## Entropy

Entropy measures the **disorder** of a system. In statistical terms:

$$S = k_B \ln \Omega$$

Copy code
```python
import math

def entropy(p):
    return -sum(x * math.log(x) for x in p if x > 0)
```

Use ```len(p)``` to count outcomes, and `math.log` for the natural log.

| Process | $\Delta S$ |
|---|---|
| Free expansion | > 0 |
| Reversible cycle | 0 |

- [x] Revise the second law
- [ ] Solve past paper Q3
"#;

fn create_answer(sections: usize) -> String {
    ANSWER.repeat(sections)
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for sections in [1, 10, 100] {
        let text = create_answer(sections);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_function(format!("clean_{}", sections), |b| {
            b.iter(|| clean_message_text(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let copy = CopyIndicator::new();
    let ctx = RenderContext::new(&copy, Instant::now());

    for sections in [1, 10, 100] {
        let message = Message::bot(create_answer(sections), Some(vec!["ch3.pdf".to_string()]));
        group.throughput(Throughput::Bytes(message.text.len() as u64));

        group.bench_function(format!("render_{}", sections), |b| {
            b.iter(|| render_message(black_box(&message), &ctx).into_string())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clean, bench_render);
criterion_main!(benches);
