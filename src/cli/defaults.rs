pub const DEFAULT_LENGTH_BINS: &str =
    "1,30,50,100,150,200,300,350,500,750,1000,2000,5000,10000,50000,100000,500000";

pub const DEFAULT_SUPPORT_BINS: &str = "0,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20";

pub const DEFAULT_REPORT_TYPES: &str = "INS,DEL,DUP,INV,TRA";
