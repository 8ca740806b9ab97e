use criterion::criterion_main;


criterion_main!(encode::benches, decode::benches);
