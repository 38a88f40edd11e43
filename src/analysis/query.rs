use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(
        about = "Daily precipitation for every station over the trailing year",
        alias = "prcp"
    )]
    Precipitation,
    #[command(about = "List every station", alias = "sta")]
    Stations,
    #[command(
        about = "Temperature observations of the most active station over the trailing year",
        alias = "temps"
    )]
    Tobs,
    #[command(
        about = "Min/avg/max temperature from a start date, optionally through an end date",
        alias = "sum"
    )]
    Summary {
        #[arg(required = true)]
        start: String,
        end: Option<String>,
    },
    #[command(about = "Show the reflected archive schema")]
    Schema,
}
