use ccload::error::AppResult;

fn main() -> AppResult<()> {
    ccload::entry::run()
}
