use std::path::Path;
use std::process::exit;

use clap::{Parser, ValueEnum};

use exact_simplex::algorithm::OptimizationResult;
use exact_simplex::algorithm::two_phase::{Solver, Verbosity};
use exact_simplex::algorithm::two_phase::strategy::pivot_rule::{Bland, MaxCoef, MaxIncrease, PivotRule, Random};
use exact_simplex::algorithm::two_phase::tableau::Tableau;
use exact_simplex::data::number_types::RationalBig;
use exact_simplex::io::import;

/// An exact linear program solver written in rust.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// File containing the problem description
    input: String,
    /// The pivot rule that is used
    #[arg(long, value_enum, default_value = "bland")]
    pivot: PivotOption,
    /// Print every basis change and the tableau it produces
    #[arg(long)]
    verbose: bool,
    /// Seed for the random pivot rule, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PivotOption {
    Bland,
    Random,
    #[value(name = "maxcoef")]
    MaxCoef,
    #[value(name = "maxincrease")]
    MaxIncrease,
}

impl PivotOption {
    fn name(self) -> &'static str {
        match self {
            Self::Bland => "bland",
            Self::Random => "random",
            Self::MaxCoef => "maxcoef",
            Self::MaxIncrease => "maxincrease",
        }
    }
}

fn main() {
    let opts = Opts::parse();

    let path = Path::new(&opts.input);
    let canonical = match import::<RationalBig>(path) {
        Ok(canonical) => canonical,
        Err(error) => {
            println!("Problem reading the input file \"{}\": {}", path.display(), error);
            exit(1);
        },
    };

    let mut tableau = Tableau::new(canonical);
    print!("{}", tableau.statement());

    let verbosity = if opts.verbose { Verbosity::Verbose } else { Verbosity::Concise };
    let (result, nr_pivots) = match opts.pivot {
        PivotOption::Bland => run(Solver::with_verbosity(Bland::new(), verbosity), &mut tableau),
        PivotOption::Random => {
            let rule = match opts.seed {
                Some(seed) => Random::with_seed(seed),
                None => Random::new(),
            };
            run(Solver::with_verbosity(rule, verbosity), &mut tableau)
        },
        PivotOption::MaxCoef => {
            run(Solver::with_verbosity(MaxCoef::new(), verbosity), &mut tableau)
        },
        PivotOption::MaxIncrease => {
            run(Solver::with_verbosity(MaxIncrease::new(), verbosity), &mut tableau)
        },
    };

    match result {
        OptimizationResult::Infeasible => println!("The linear program is infeasible"),
        OptimizationResult::Unbounded => println!("The linear program is unbounded"),
        OptimizationResult::FiniteOptimum(solution) => {
            println!("An optimal solution is: {}", solution);
            println!("The value of the objective function is: {}", solution.objective_value());
            println!("The number of pivots is: {}", nr_pivots);
            println!("The pivot rule used: {}", opts.pivot.name());
        },
    }
}

fn run<PR: PivotRule>(
    mut solver: Solver<PR>,
    tableau: &mut Tableau<RationalBig>,
) -> (OptimizationResult<RationalBig>, usize) {
    let result = solver.solve(tableau);
    (result, solver.nr_pivots())
}
