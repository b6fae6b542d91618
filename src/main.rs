use clap::Parser;
use nutriplan::core::budget::{BudgetPlan, SAVING_TIPS};
use nutriplan::core::ConfigProvider;
use nutriplan::domain::model::NutritionRecord;
use nutriplan::utils::logger;
use nutriplan::utils::validation::{validate_min, Validate};
use nutriplan::{CliConfig, Command, NutriError, NutriPlan, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting NutriPlan");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let mut config = match TomlConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    cli.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    // 預算規劃不需要模型或資料集
    if let Command::Budget { amount } = &cli.command {
        if let Err(e) = run_budget(*amount) {
            exit_with(&e);
        }
        return Ok(());
    }

    // 啟動時載入模型與資料集，缺一即停止
    let app = match NutriPlan::load(&config) {
        Ok(app) => app,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(&app, &config, &cli.command).await {
        exit_with(&e);
    }

    Ok(())
}

async fn run(app: &NutriPlan, config: &TomlConfig, command: &Command) -> nutriplan::Result<()> {
    match command {
        Command::Predict {
            protein,
            carbs,
            fat,
            preferences,
        } => {
            validate_min("Protein (g)", *protein, 0.0)?;
            validate_min("Carbohydrates (g)", *carbs, 0.0)?;
            validate_min("Fat (g)", *fat, 0.0)?;
            if !(protein.is_finite() && carbs.is_finite() && fat.is_finite()) {
                return Err(NutriError::ValidationError {
                    message: "Macro values must be finite numbers".to_string(),
                });
            }

            let class = app.classify(*protein, *carbs, *fat);
            tracing::info!("Predicted {} for protein={} carbs={} fat={}", class, protein, carbs, fat);
            println!("🔔 Predicted Calorie Class: {}", class);
            if !preferences.is_empty() {
                let prefs: Vec<String> = preferences.iter().map(|p| p.to_string()).collect();
                println!("Dietary Preferences: {}", prefs.join(", "));
            }
        }
        Command::Lookup { food } => match app.find(food) {
            Some(record) => {
                let matches = app.table().find_all(food).count();
                if matches > 1 {
                    println!("{} matches; showing the first", matches);
                }
                print_nutrition_facts(food, record);
            }
            None => {
                tracing::info!("No dataset match for '{}'", food);
                println!("⚠️ Food item not found in database");
            }
        },
        Command::Plan { .. } => {
            if let Some(request) = command.plan_request() {
                request.validate()?;
                // 表單輸入僅記錄，不影響抽樣
                tracing::debug!("Plan request (not applied): {:?}", request);
            }

            let plan = app.sample_days(config.plan_days(), config.meals_per_day())?;
            println!("✅ Generated Weekly Meal Plan!");
            for day in &plan.days {
                println!("\n=== {} ===", day.day_name());
                for meal in &day.meals {
                    println!("#### {} - {}kcal", meal.food_name, meal.calories);
                    println!(
                        "Protein: {}g | Carbs: {}g | Fat: {}g",
                        meal.protein_g, meal.carbs_g, meal.fat_g
                    );
                }
            }
        }
        Command::Ask { prompt } => {
            let reply = app.ask(prompt).await?;
            println!("Assistant Response:");
            println!("{}", reply);
        }
        Command::Budget { amount } => run_budget(*amount)?,
    }
    Ok(())
}

fn print_nutrition_facts(query: &str, record: &NutritionRecord) {
    let breakdown = record.macro_breakdown();
    println!("🔍 Detailed Nutrition Facts for {}", query);
    println!("Food Item: {}", record.food_name);
    println!("Calories: {} kcal", record.calories);
    println!("Protein: {}g ({:.1}%)", record.protein_g, breakdown.protein_pct);
    println!("Carbs: {}g ({:.1}%)", record.carbs_g, breakdown.carbs_pct);
    println!("Fat: {}g ({:.1}%)", record.fat_g, breakdown.fat_pct);
}

fn run_budget(amount: u32) -> nutriplan::Result<()> {
    let plan = BudgetPlan::allocate(amount)?;
    print_budget(&plan);
    Ok(())
}

fn print_budget(plan: &BudgetPlan) {
    for (title, tips) in SAVING_TIPS {
        println!("### {}", title);
        for tip in tips {
            println!("- {}", tip);
        }
        println!();
    }

    println!("### Recommended Allocation for ${}:", plan.weekly_budget);
    for allocation in &plan.allocations {
        println!(
            "{:<12} {:>5.1}%  ${:.2}",
            allocation.category,
            allocation.percent(),
            allocation.amount
        );
    }
}

fn exit_with(e: &NutriError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
