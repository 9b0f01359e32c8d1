//! Forecast CLI commands

use crate::config::settings::Settings;
use crate::display::{format_amount, month_name};
use crate::error::ExpenseResult;
use crate::forecast::ModelState;
use crate::services::ForecastService;
use crate::storage::Storage;

/// Train the forecast model on every recorded expense
pub fn handle_train(storage: &Storage) -> ExpenseResult<()> {
    match ForecastService::new(storage).train()? {
        Some(model) => {
            println!("Model trained successfully!");
            println!(
                "  Months used: {}",
                model
                    .months
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        None => println!("Not enough data to train the model."),
    }
    Ok(())
}

/// Print the forecast for the month after the latest expense
pub fn handle_predict(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    match ForecastService::new(storage).predict()? {
        Some(forecast) => println!(
            "Predicted expense for next month ({}): {}",
            month_name(forecast.target_month),
            format_amount(forecast.amount, &settings.currency_symbol)
        ),
        None => println!("Train the model first or add more data."),
    }
    Ok(())
}

/// Show whether a model is trained and its parameters
pub fn handle_model(storage: &Storage) -> ExpenseResult<()> {
    let service = ForecastService::new(storage);

    let state = service.status()?;

    println!("Model: {}", state);
    println!("Artifact: {}", storage.model.path().display());

    if state == ModelState::Trained {
        if let Some(model) = service.current_model()? {
            println!("Fitted at:  {}", model.fitted_at.format("%Y-%m-%d %H:%M:%S UTC"));
            println!("Intercept:  {:.4}", model.trend.intercept());
            println!("Slope:      {:.4}", model.trend.slope());
            println!("R-squared:  {:.4}", model.trend.r_squared());
            println!("Months:     {}", model.trend.n_observations());
        }
    }

    Ok(())
}
