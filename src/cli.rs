use clap::Parser;

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Pick your numbers and see how many the draw hits!")]
pub struct Cli {
    #[arg(
        long,
        help = "Numbers picked and drawn per round (1 to 49)",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    pub amount: i64,
}
