#[macro_use]
extern crate bencher;

use bencher::Bencher;

use prefix_codes::huffman;
use prefix_codes::limited;


/// Byte histogram of the first 64k of an english text sample.
const TEXT_HISTOGRAM: [u32; 256] = [
    0,0,0,0,0,0,0,0,0,0,538,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8289,6,72,31,0,1,309,509,57,58,58,0,448,278,565,490,150,215,94,61,57,71,47,53,87,123,195,345,294,151,293,12,
    0,275,85,153,50,97,76,64,56,134,40,33,66,113,58,33,116,5,98,147,172,33,17,84,3,11,19,1172,0,1173,0,35,
    0,4125,472,1866,1424,4746,918,776,2091,4112,73,308,1796,1593,3528,3514,1109,177,3069,3334,4336,1288,513,535,179,670,58,64,171,64,3,0,
    6,0,5,2,5,3,0,0,2,1,3,0,2,0,0,0,4,0,0,1,2,2,1,2,4,2,0,2,1,1,0,1,
    4,1,3,0,1,1,2,2,1,15,2,2,0,2,0,2,4,1,2,7,2,0,0,4,17,2,3,1,3,3,0,1,
    0,0,0,25,2,1,0,0,0,0,0,0,0,0,0,0,19,7,0,0,0,0,0,7,10,6,0,1,0,0,0,0,
    14,0,3,5,2,1,2,0,0,0,0,1,2,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
];

const LIMIT: u8 = 12;


fn unlimited_moffat(bench: &mut Bencher) {
    bench.iter(||{
        let mut lengths = [ 0_u8; 256 ];
        let max_bits = huffman::code_lengths(&TEXT_HISTOGRAM, &mut lengths).unwrap();
        bencher::black_box((max_bits, lengths));
    })
}

fn limited_package_merge(bench: &mut Bencher) {
    bench.iter(||{
        let mut lengths = [ 0_u8; 256 ];
        let max_bits = limited::package_merge(LIMIT, &TEXT_HISTOGRAM, &mut lengths).unwrap();
        bencher::black_box((max_bits, lengths));
    })
}

fn limited_jpeg(bench: &mut Bencher) {
    bench.iter(||{
        let mut lengths = [ 0_u8; 256 ];
        let max_bits = limited::jpeg(LIMIT, &TEXT_HISTOGRAM, &mut lengths).unwrap();
        bencher::black_box((max_bits, lengths));
    })
}

fn limited_miniz(bench: &mut Bencher) {
    bench.iter(||{
        let mut lengths = [ 0_u8; 256 ];
        let max_bits = limited::miniz(LIMIT, &TEXT_HISTOGRAM, &mut lengths).unwrap();
        bencher::black_box((max_bits, lengths));
    })
}

fn limited_bzip2(bench: &mut Bencher) {
    bench.iter(||{
        let mut lengths = [ 0_u8; 256 ];
        let max_bits = limited::bzip2(LIMIT, &TEXT_HISTOGRAM, &mut lengths).unwrap();
        bencher::black_box((max_bits, lengths));
    })
}

fn limited_kraft(bench: &mut Bencher) {
    bench.iter(||{
        let mut lengths = [ 0_u8; 256 ];
        let max_bits = limited::kraft(LIMIT, &TEXT_HISTOGRAM, &mut lengths).unwrap();
        bencher::black_box((max_bits, lengths));
    })
}

fn limited_kraft_heap(bench: &mut Bencher) {
    bench.iter(||{
        let mut lengths = [ 0_u8; 256 ];
        let max_bits = limited::kraft_heap(LIMIT, &TEXT_HISTOGRAM, &mut lengths).unwrap();
        bencher::black_box((max_bits, lengths));
    })
}

benchmark_group!(
    benches,
    unlimited_moffat,
    limited_package_merge,
    limited_jpeg,
    limited_miniz,
    limited_bzip2,
    limited_kraft,
    limited_kraft_heap
);

benchmark_main!(benches);
