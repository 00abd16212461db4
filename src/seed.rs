use crate::{
    db::{
        agentdb::{AgentExt, NewAgent},
        db::DBClient,
        propertydb::PropertyExt,
    },
    dtos::propertydtos::CreatePropertyDto,
    models::propertymodel::{PropertyCategory, PropertyType},
};

/// One-shot bootstrap: populate sample agents and listings when the database
/// is empty. The count-then-insert probe is racy under concurrent startup,
/// which is acceptable for a one-time task run before serving traffic.
pub async fn run_if_empty(db_client: &DBClient) -> Result<(), anyhow::Error> {
    let existing = db_client.count_properties().await?;
    if existing > 0 {
        tracing::info!("database already seeded ({} properties), skipping", existing);
        return Ok(());
    }

    tracing::info!("seeding sample agents and properties");

    let priya = db_client
        .create_agent(NewAgent {
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@propnest.example".to_string(),
            phone: "+919820011001".to_string(),
            specialization: Some("Residential sales".to_string()),
            areas: Some(vec!["Andheri".to_string(), "Bandra".to_string()]),
            experience: Some(8),
            rating: Some(4.7),
            review_count: Some(112),
            image: None,
            bio: Some("Helping families find homes across western Mumbai.".to_string()),
        })
        .await?;

    let arjun = db_client
        .create_agent(NewAgent {
            name: "Arjun Mehta".to_string(),
            email: "arjun.mehta@propnest.example".to_string(),
            phone: "+919820011002".to_string(),
            specialization: Some("Commercial leasing".to_string()),
            areas: Some(vec!["Whitefield".to_string(), "Indiranagar".to_string()]),
            experience: Some(12),
            rating: Some(4.5),
            review_count: Some(86),
            image: None,
            bio: None,
        })
        .await?;

    let listings = vec![
        CreatePropertyDto {
            title: "2BHK apartment near Andheri metro".to_string(),
            description: "Bright two-bedroom flat with society amenities, five minutes from the metro station.".to_string(),
            property_type: PropertyType::Apartment,
            category: PropertyCategory::Buy,
            address: "14 Veera Desai Road".to_string(),
            city: "Mumbai".to_string(),
            location: "Andheri West".to_string(),
            latitude: Some("19.1197".to_string()),
            longitude: Some("72.8464".to_string()),
            bedrooms: Some(2),
            bathrooms: Some(2),
            area: Some(950),
            price: 17_500_000,
            price_display: Some("₹1.75 Cr".to_string()),
            images: vec!["https://images.propnest.example/mumbai-2bhk-1.jpg".to_string()],
            amenities: Some(vec!["Gym".to_string(), "Covered parking".to_string()]),
            features: None,
            agent_id: Some(priya.id),
            status: None,
            featured: true,
            is_new_launch: false,
            is_exclusive: true,
            is_ready_to_move: true,
        },
        CreatePropertyDto {
            title: "Sea-facing villa in Bandra".to_string(),
            description: "Four-bedroom villa with a private terrace and uninterrupted sea views.".to_string(),
            property_type: PropertyType::Villa,
            category: PropertyCategory::Buy,
            address: "3 Carter Road".to_string(),
            city: "Mumbai".to_string(),
            location: "Bandra West".to_string(),
            latitude: Some("19.0596".to_string()),
            longitude: Some("72.8295".to_string()),
            bedrooms: Some(4),
            bathrooms: Some(5),
            area: Some(3200),
            price: 120_000_000,
            price_display: Some("₹12 Cr".to_string()),
            images: vec!["https://images.propnest.example/bandra-villa-1.jpg".to_string()],
            amenities: Some(vec!["Private pool".to_string()]),
            features: Some(vec!["Sea view".to_string()]),
            agent_id: Some(priya.id),
            status: None,
            featured: true,
            is_new_launch: true,
            is_exclusive: false,
            is_ready_to_move: false,
        },
        CreatePropertyDto {
            title: "Office floor in Whitefield tech park".to_string(),
            description: "Fitted-out commercial floor plate suitable for a 60-seat team.".to_string(),
            property_type: PropertyType::Commercial,
            category: PropertyCategory::Rent,
            address: "Plot 22, ITPL Main Road".to_string(),
            city: "Bangalore".to_string(),
            location: "Whitefield".to_string(),
            latitude: None,
            longitude: None,
            bedrooms: None,
            bathrooms: Some(2),
            area: Some(4800),
            price: 520_000,
            price_display: Some("₹5.2 L/month".to_string()),
            images: vec!["https://images.propnest.example/whitefield-office-1.jpg".to_string()],
            amenities: Some(vec!["Power backup".to_string(), "Cafeteria".to_string()]),
            features: None,
            agent_id: Some(arjun.id),
            status: None,
            featured: false,
            is_new_launch: false,
            is_exclusive: false,
            is_ready_to_move: true,
        },
        CreatePropertyDto {
            title: "Single room PG near Indiranagar".to_string(),
            description: "Furnished private room with meals included, walking distance to 100 Feet Road.".to_string(),
            property_type: PropertyType::Apartment,
            category: PropertyCategory::Pg,
            address: "8 HAL 2nd Stage".to_string(),
            city: "Bangalore".to_string(),
            location: "Indiranagar".to_string(),
            latitude: None,
            longitude: None,
            bedrooms: Some(1),
            bathrooms: Some(1),
            area: Some(180),
            price: 18_000,
            price_display: Some("₹18,000/month".to_string()),
            images: vec!["https://images.propnest.example/indiranagar-pg-1.jpg".to_string()],
            amenities: Some(vec!["Wi-Fi".to_string(), "Meals".to_string()]),
            features: None,
            agent_id: Some(arjun.id),
            status: None,
            featured: false,
            is_new_launch: false,
            is_exclusive: false,
            is_ready_to_move: true,
        },
        CreatePropertyDto {
            title: "Residential plot in Gurgaon sector 57".to_string(),
            description: "Corner plot in a gated layout with clear title and park frontage.".to_string(),
            property_type: PropertyType::Plot,
            category: PropertyCategory::Buy,
            address: "Sector 57".to_string(),
            city: "Gurgaon".to_string(),
            location: "Sushant Lok III".to_string(),
            latitude: None,
            longitude: None,
            bedrooms: None,
            bathrooms: None,
            area: Some(2700),
            price: 45_000_000,
            price_display: Some("₹4.5 Cr".to_string()),
            images: vec!["https://images.propnest.example/gurgaon-plot-1.jpg".to_string()],
            amenities: None,
            features: Some(vec!["Corner plot".to_string()]),
            agent_id: None,
            status: None,
            featured: false,
            is_new_launch: false,
            is_exclusive: false,
            is_ready_to_move: false,
        },
    ];

    for listing in listings {
        db_client.create_property(listing).await?;
    }

    tracing::info!("seed complete");
    Ok(())
}
