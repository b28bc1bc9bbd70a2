diesel::table! {
    dim_customer (customer_key) {
        customer_key -> Integer,
        first_name -> Text,
        last_name -> Text,
        birth_date -> Date,
        gender -> Text,
        occupation -> Text,
    }
}

diesel::table! {
    dim_date (date_key) {
        date_key -> Integer,
        full_date -> Date,
        calendar_year -> Integer,
        month_number -> Integer,
        month_name -> Text,
        quarter -> Integer,
    }
}

diesel::table! {
    dim_product (product_key) {
        product_key -> Integer,
        name -> Text,
        subcategory_key -> Nullable<Integer>,
    }
}

diesel::table! {
    dim_product_category (category_key) {
        category_key -> Integer,
        name -> Text,
    }
}

diesel::table! {
    dim_product_subcategory (subcategory_key) {
        subcategory_key -> Integer,
        category_key -> Integer,
        name -> Text,
    }
}

diesel::table! {
    dim_sales_territory (territory_key) {
        territory_key -> Integer,
        region -> Text,
        country -> Text,
        territory_group -> Text,
    }
}

diesel::table! {
    fact_sales (id) {
        id -> Integer,
        order_date_key -> Integer,
        product_key -> Integer,
        customer_key -> Integer,
        territory_key -> Integer,
        order_quantity -> Integer,
        sales_amount -> Double,
        total_cost -> Double,
    }
}

diesel::joinable!(dim_product -> dim_product_subcategory (subcategory_key));
diesel::joinable!(dim_product_subcategory -> dim_product_category (category_key));
diesel::joinable!(fact_sales -> dim_customer (customer_key));
diesel::joinable!(fact_sales -> dim_date (order_date_key));
diesel::joinable!(fact_sales -> dim_product (product_key));
diesel::joinable!(fact_sales -> dim_sales_territory (territory_key));

diesel::allow_tables_to_appear_in_same_query!(
    dim_customer,
    dim_date,
    dim_product,
    dim_product_category,
    dim_product_subcategory,
    dim_sales_territory,
    fact_sales,
);
