pub mod u501_generate_sample_data;
