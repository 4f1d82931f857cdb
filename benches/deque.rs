#![cfg(feature = "unstable")]
#![feature(test)]

extern crate std;
extern crate test;

use rand::{rngs::SmallRng, Rng, RngCore, SeedableRng};
use ringdeque::RingDeque;
use std::collections::VecDeque;
use test::Bencher;

trait Queue {
    fn with_size_hint(n: usize) -> Self;
    fn push_back(&mut self, x: u32) -> bool;
    fn push_front(&mut self, x: u32) -> bool;
    fn pop_front(&mut self) -> Option<u32>;
    fn pop_back(&mut self) -> Option<u32>;
}

impl Queue for RingDeque<u32> {
    fn with_size_hint(n: usize) -> Self {
        let mut deque = RingDeque::with_size(n);
        deque.clear();
        deque
    }
    fn push_back(&mut self, x: u32) -> bool {
        RingDeque::push_back(self, x).is_ok()
    }
    fn push_front(&mut self, x: u32) -> bool {
        RingDeque::push_front(self, x).is_ok()
    }
    fn pop_front(&mut self) -> Option<u32> {
        RingDeque::pop_front(self).ok()
    }
    fn pop_back(&mut self) -> Option<u32> {
        RingDeque::pop_back(self).ok()
    }
}

impl Queue for VecDeque<u32> {
    fn with_size_hint(n: usize) -> Self {
        VecDeque::with_capacity(2 * n)
    }
    fn push_back(&mut self, x: u32) -> bool {
        VecDeque::push_back(self, x);
        true
    }
    fn push_front(&mut self, x: u32) -> bool {
        VecDeque::push_front(self, x);
        true
    }
    fn pop_front(&mut self) -> Option<u32> {
        VecDeque::pop_front(self)
    }
    fn pop_back(&mut self) -> Option<u32> {
        VecDeque::pop_back(self)
    }
}

macro_rules! fifo {
    ($fnn:ident, $ty:ty, $n:expr) => {
        #[bench]
        fn $fnn(b: &mut Bencher) {
            let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
            let mut queue = <$ty as Queue>::with_size_hint($n);
            b.iter(|| {
                for _ in 0..$n {
                    Queue::push_back(&mut queue, rng.next_u32());
                }
                for _ in 0..$n {
                    test::black_box(Queue::pop_front(&mut queue));
                }
            })
        }
    };
}

macro_rules! mixed_ends {
    ($fnn:ident, $ty:ty, $n:expr) => {
        #[bench]
        fn $fnn(b: &mut Bencher) {
            let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
            let mut queue = <$ty as Queue>::with_size_hint($n);
            b.iter(|| {
                for _ in 0..4 * $n {
                    let x = rng.next_u32();
                    match rng.gen_range(0..4) {
                        0 => { Queue::push_front(&mut queue, x); }
                        1 => { Queue::push_back(&mut queue, x); }
                        2 => { test::black_box(Queue::pop_front(&mut queue)); }
                        _ => { test::black_box(Queue::pop_back(&mut queue)); }
                    }
                }
            })
        }
    };
}

mod ring_deque {
    use super::*;

    fifo!(fifo_16, RingDeque<u32>, 16);
    fifo!(fifo_256, RingDeque<u32>, 256);
    fifo!(fifo_4096, RingDeque<u32>, 4096);
    mixed_ends!(mixed_16, RingDeque<u32>, 16);
    mixed_ends!(mixed_256, RingDeque<u32>, 256);
    mixed_ends!(mixed_4096, RingDeque<u32>, 4096);
}

mod vec_deque {
    use super::*;

    fifo!(fifo_16, VecDeque<u32>, 16);
    fifo!(fifo_256, VecDeque<u32>, 256);
    fifo!(fifo_4096, VecDeque<u32>, 4096);
    mixed_ends!(mixed_16, VecDeque<u32>, 16);
    mixed_ends!(mixed_256, VecDeque<u32>, 256);
    mixed_ends!(mixed_4096, VecDeque<u32>, 4096);
}
