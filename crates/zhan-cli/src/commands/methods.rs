use comfy_table::{ContentArrangement, Table};
use zhan_oracle::{Method, OracleConfig};

fn aliases(method: Method) -> &'static str {
    match method {
        Method::LiuYao => "六爻",
        Method::QiMen => "奇门, 奇门遁甲",
        Method::DaLiuRen => "liuren, 六壬, 大六壬",
        Method::ZiWei => "紫微, 紫微斗数",
    }
}

pub fn run() -> Result<(), String> {
    let defaults = OracleConfig::default();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Method", "Name", "Aliases", "Random by default"]);

    for method in Method::ALL {
        let randomized = if method.is_randomized(&defaults) {
            "yes"
        } else {
            "no"
        };
        let name = method.to_string();
        table.add_row(vec![method.slug(), name.as_str(), aliases(method), randomized]);
    }

    println!("{table}");
    println!();
    println!("  {} methods", Method::ALL.len());

    Ok(())
}
