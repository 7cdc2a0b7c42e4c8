use std::collections::BTreeMap;
use std::fmt::Debug;

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use fixedheap::{aggregate, BoundedHeap, HeapConfig, HeapError, HeapNode, Policy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const DIRECTIONS: [&str; 4] = ["east", "west", "north", "south"];
pub const SCORED_DIRECTIONS: [&str; 2] = ["east", "south"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoCase {
    /// One list per item, scored by its sum
    Simple,
    /// One list per (item, direction), scored by its mean
    Mean,
    /// Per-direction lists per item, scored by the east and south sums
    Parts,
    /// Every case above
    All,
}

#[derive(Args)]
pub struct DemoCMD {
    #[arg(short = 'p', long = "policy", default_value = "max")]
    /// Eviction policy: min, max or random
    pub policy: String,

    #[arg(short = 'l', long = "limit", default_value = "3", allow_negative_numbers = true)]
    /// Number of items the heap retains
    pub limit: i64,

    #[arg(short = 'n', long = "size", default_value = "10")]
    /// Number of generated items
    pub size: usize,

    #[arg(long = "data-size", default_value = "10")]
    /// Length of each generated value list
    pub data_size: usize,

    #[arg(long = "min-value", default_value = "1")]
    pub min_value: u32,

    #[arg(long = "max-value", default_value = "100")]
    pub max_value: u32,

    #[arg(long = "case", value_enum, default_value_t = DemoCase::Simple)]
    pub case: DemoCase,

    #[arg(long = "seed")]
    /// Seed for data generation and the random policy
    pub seed: Option<u64>,
}

impl DemoCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let policy: Policy = self.policy.parse()?;
        if self.limit <= 0 {
            return Err(HeapError::invalid_configuration(
                self.limit,
                Some("limit must be a positive integer"),
            )
            .into());
        }
        if self.min_value > self.max_value {
            bail!(
                "--min-value {} is larger than --max-value {}",
                self.min_value,
                self.max_value
            );
        }
        if self.data_size == 0 {
            bail!("--data-size must be positive");
        }

        let mut config = HeapConfig::new(policy, self.limit as usize);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        let mut demo = Demo {
            config,
            size: self.size,
            data_size: self.data_size,
            value_range: (self.min_value, self.max_value),
            rng: match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        };

        let cases = match self.case {
            DemoCase::All => vec![DemoCase::Simple, DemoCase::Mean, DemoCase::Parts],
            case => vec![case],
        };
        for case in cases {
            println!("{:?}, {}", case, policy.name());
            let emitted = demo.run(case)?;
            log::info!("{:?} demo emitted {} items in valid order", case, emitted);
            println!("{}", "=-".repeat(40));
        }

        log::info!("Demo has finished succesfully");
        Ok(())
    }
}

pub struct Demo {
    pub config: HeapConfig,
    pub size: usize,
    pub data_size: usize,
    pub value_range: (u32, u32),
    rng: StdRng,
}

impl Demo {
    pub fn run(&mut self, case: DemoCase) -> Result<usize> {
        match case {
            DemoCase::Simple => {
                let mut heap = BoundedHeap::<(usize, Vec<u32>), Vec<u32>, u64>::from_parts(
                    &self.config,
                    Box::new(|data: &Vec<u32>| widened_sum(data)),
                )?;
                for key in 0..self.size {
                    let data = self.random_list();
                    heap.insert((key, data.clone()), data)?;
                }
                check_heap(&mut heap)
            }
            DemoCase::Mean => {
                let mut heap = BoundedHeap::<(usize, &str), Vec<u32>, f64>::from_parts(
                    &self.config,
                    aggregate::mean(),
                )?;
                for key in 0..self.size {
                    for direction in DIRECTIONS {
                        let data = self.random_list();
                        heap.insert((key, direction), data)?;
                    }
                }
                check_heap(&mut heap)
            }
            DemoCase::Parts => {
                let mut heap = BoundedHeap::<usize, BTreeMap<&str, Vec<u32>>, u64>::from_parts(
                    &self.config,
                    Box::new(sum_of_parts),
                )?;
                for key in 0..self.size {
                    let data = DIRECTIONS
                        .iter()
                        .map(|direction| (*direction, self.random_list()))
                        .collect::<BTreeMap<_, _>>();
                    heap.insert(key, data)?;
                }
                check_heap(&mut heap)
            }
            DemoCase::All => bail!("the All case is expanded by the caller"),
        }
    }

    fn random_list(&mut self) -> Vec<u32> {
        let (lo, hi) = self.value_range;
        let mut data: Vec<u32> = (0..self.data_size)
            .map(|_| self.rng.gen_range(lo..=hi))
            .collect();
        data.shuffle(&mut self.rng);
        data
    }
}

// u32 values summed as u64 so long lists of large values cannot overflow
fn widened_sum(data: &[u32]) -> u64 {
    data.iter().map(|v| u64::from(*v)).sum()
}

fn sum_of_parts(data: &BTreeMap<&str, Vec<u32>>) -> u64 {
    SCORED_DIRECTIONS
        .iter()
        .filter_map(|direction| data.get(direction))
        .map(|part| widened_sum(part))
        .sum()
}

/// Drains `heap`, printing each key with its score, and fails if a ranked policy emitted out of order.
pub fn check_heap<K, D, S>(heap: &mut BoundedHeap<K, D, S>) -> Result<usize>
where
    K: Debug,
    S: PartialOrd + Debug,
{
    let policy = heap.policy();
    check_order(policy, heap.drain_nodes())
}

/// Prints and counts `nodes`, failing on the first score out of `policy` order.
pub fn check_order<K, S, I>(policy: Policy, nodes: I) -> Result<usize>
where
    K: Debug,
    S: PartialOrd + Debug,
    I: IntoIterator<Item = HeapNode<K, S>>,
{
    let mut previous: Option<S> = None;
    let mut emitted = 0;

    for node in nodes {
        let (key, score) = node.into_parts();
        println!("key={:?}, agg={:?}", key, score);

        if let Some(prev) = &previous {
            let in_order = match policy {
                Policy::Min => prev <= &score,
                Policy::Max => prev >= &score,
                Policy::Random => true,
            };
            if !in_order {
                bail!(
                    "{} heap emitted {:?} after {:?}",
                    policy.name(),
                    score,
                    prev
                );
            }
        }
        previous = Some(score);
        emitted += 1;
    }

    Ok(emitted)
}
