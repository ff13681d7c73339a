use http_types::{Response, StatusCode};
use sroute::{Config, Context};

async fn index(_ctx: Context) -> sroute::Result<Response> {
    let mut res = Response::new(StatusCode::Ok);
    res.set_body("hello from sroute");
    Ok(res)
}

async fn user_home(ctx: Context) -> sroute::Result<Response> {
    let mut res = Response::new(StatusCode::Ok);
    res.set_body(format!("request #{} for {}", ctx.id(), ctx.path()));
    Ok(res)
}

async fn order_detail(_ctx: Context) -> sroute::Result<Response> {
    let mut res = Response::new(StatusCode::Ok);
    res.set_body("order detail");
    Ok(res)
}

#[async_std::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut app = sroute::with_config(Config::from_env());
    app.get("/", index)
        .get("/user/home", user_home)
        .get("/order/detail", order_detail);
    app.listen().await
}
