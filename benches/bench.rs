#![feature(test)]
/// Notes
/// 1. Every bench has 10,000 conversions
/// 2. The points are scattered over the cities in China

extern crate test;

use test::Bencher;

use chinacoord::{Coordinate, Crs};

const REPEAT: usize = 1000;
const POINTS: [Coordinate; 10] = [
    Coordinate::new(116.404, 39.915),
    Coordinate::new(121.4737, 31.2304),
    Coordinate::new(113.2644, 23.1291),
    Coordinate::new(114.0579, 22.5431),
    Coordinate::new(104.0665, 30.5723),
    Coordinate::new(87.6168, 43.8256),
    Coordinate::new(126.535, 45.8038),
    Coordinate::new(91.1409, 29.6456),
    Coordinate::new(110.3312, 20.0311),
    Coordinate::new(108.9398, 34.3416),
];

fn points() -> Vec<Coordinate> {
    let mut ps = Vec::with_capacity(POINTS.len() * REPEAT);
    for _ in 0..REPEAT {
        ps.extend(POINTS);
    }
    ps
}

macro_rules! impl_bench {
    ($m:ident) => {
        #[bench]
        fn $m(b: &mut Bencher) {
            let ps = points();

            b.iter(|| {
                let _ = ps.iter().map(|p| p.$m()).collect::<Vec<_>>();
            });
        }
    };
}

impl_bench!(wgs84_to_gcj02);
impl_bench!(gcj02_to_wgs84);
impl_bench!(gcj02_to_bd09);
impl_bench!(bd09_to_gcj02);
impl_bench!(wgs84_to_bd09);
impl_bench!(bd09_to_wgs84);

#[bench]
fn gcj02_to_wgs84_exact(b: &mut Bencher) {
    let ps = points();

    b.iter(|| {
        let _ = ps
            .iter()
            .map(|p| p.gcj02_to_wgs84_exact().unwrap())
            .collect::<Vec<_>>();
    });
}

#[bench]
fn convert(b: &mut Bencher) {
    let ps = points();

    b.iter(|| {
        let _ = ps
            .iter()
            .map(|p| p.convert(Crs::Bd09, Crs::Wgs84))
            .collect::<Vec<_>>();
    });
}
