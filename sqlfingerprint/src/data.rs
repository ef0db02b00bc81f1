//! Raw classification data.
//!
//! Spellings cover the union of MySQL, PostgreSQL, SQL Server, Oracle,
//! SQLite and MS Access vocabulary that shows up in injection payloads,
//! including a few deliberate misspellings seen in the wild (`UNI_ON`,
//! `OWN3D`). Entries are canonical uppercase; the [`Lexicon`] constructor
//! sorts and validates them, so the order here only has to stay readable.
//!
//! [`Lexicon`]: crate::Lexicon

/// Single-word spellings and their category tags.
pub(crate) static KEYWORDS: &[(&str, u8)] = &[
    // Oracle package functions reachable without a schema prefix.
    ("UTL_INADDR.GET_HOST_ADDRESS", b'f'),
    ("DBMS_PIPE.RECEIVE_MESSAGE", b'f'),
    ("CTXSYS.DRITHSX.SN", b'f'),
    ("SYS.STRAGG", b'f'),
    ("SYS.FN_BUILTIN_PERMISSIONS", b'f'),
    ("SYS.FN_GET_AUDIT_FILE", b'f'),
    ("SYS.FN_MY_PERMISSIONS", b'f'),
    ("ABS", b'f'),
    ("ACCESSIBLE", b'k'),
    ("ACOS", b'f'),
    ("ADD", b'k'),
    ("ADDDATE", b'f'),
    ("ADDTIME", b'f'),
    ("AES_DECRYPT", b'f'),
    ("AES_ENCRYPT", b'f'),
    ("AGAINST", b'k'),
    ("AGE", b'f'),
    ("ALTER", b'k'),
    ("ALL_USERS", b'k'),
    ("ANALYZE", b'k'),
    ("AND", b'&'),
    // pgsql array builtins
    ("ARRAY_AGG", b'f'),
    ("ARRAY_CAT", b'f'),
    ("ARRAY_NDIMS", b'f'),
    ("ARRAY_DIM", b'f'),
    ("ARRAY_FILL", b'f'),
    ("ARRAY_LENGTH", b'f'),
    ("ARRAY_LOWER", b'f'),
    ("ARRAY_UPPER", b'f'),
    ("ARRAY_PREPEND", b'f'),
    ("ARRAY_TO_STRING", b'f'),
    ("ARRAY_TO_JSON", b'f'),
    ("APP_NAME", b'f'),
    ("APPLOCK_MODE", b'f'),
    ("APPLOCK_TEST", b'f'),
    ("ASSEMBLYPROPERTY", b'f'),
    ("AS", b'k'),
    ("ASC", b'k'),
    ("ASCII", b'f'),
    ("ASENSITIVE", b'k'),
    ("ASIN", b'f'),
    ("ASYMKEY_ID", b'f'),
    ("ATAN", b'f'),
    ("ATAN2", b'f'),
    ("AVG", b'f'),
    ("BEFORE", b'k'),
    ("BEGIN", b'k'),
    ("BENCHMARK", b'f'),
    ("BETWEEN", b'k'),
    ("BIGINT", b'k'),
    ("BIN", b'f'),
    ("BINARY", b'k'),
    ("BINARY_DOUBLE_INFINITY", b'1'),
    ("BINARY_DOUBLE_NAN", b'1'),
    ("BINARY_FLOAT_INFINITY", b'1'),
    ("BINARY_FLOAT_NAN", b'1'),
    ("BINBINARY", b'f'),
    ("BIT_AND", b'f'),
    ("BIT_COUNT", b'f'),
    ("BIT_LENGTH", b'f'),
    ("BIT_OR", b'f'),
    ("BIT_XOR", b'f'),
    ("BLOB", b'k'),
    ("BOOL_AND", b'f'),
    ("BOOL_OR", b'f'),
    ("BOOLEAN", b'k'),
    ("BOTH", b'k'),
    ("BTRIM", b'f'),
    ("BY", b'n'),
    // MS Access casts and file functions
    ("CBOOL", b'f'),
    ("CBYTE", b'f'),
    ("CCUR", b'f'),
    ("CDATE", b'f'),
    ("CDBL", b'f'),
    ("CINT", b'f'),
    ("CLNG", b'f'),
    ("CSNG", b'f'),
    ("CVAR", b'f'),
    ("CHDIR", b'f'),
    ("CHDRIVE", b'f'),
    ("CURDIR", b'f'),
    ("FILEDATETIME", b'f'),
    ("FILELEN", b'f'),
    ("GETATTR", b'f'),
    ("MKDIR", b'f'),
    ("SETATTR", b'f'),
    ("DAVG", b'f'),
    ("DCOUNT", b'f'),
    ("DFIRST", b'f'),
    ("DLAST", b'f'),
    ("DLOOKUP", b'f'),
    ("DMAX", b'f'),
    ("DMIN", b'f'),
    ("DSUM", b'f'),
    ("CALL", b'k'),
    ("CASCADE", b'k'),
    ("CASE", b'o'),
    ("CAST", b'f'),
    ("CBRT", b'f'),
    ("CEIL", b'f'),
    ("CEILING", b'f'),
    ("CERTENCODED", b'f'),
    ("CERTPRIVATEKEY", b'f'),
    ("CERT_ID", b'f'),
    ("CERT_PROPERTY", b'f'),
    ("CHANGE", b'k'),
    // also a keyword in some dialects; one tag per spelling
    ("CHAR", b'f'),
    ("CHARACTER", b'k'),
    ("CHARACTER_LENGTH", b'f'),
    ("CHARINDEX", b'f'),
    ("CHARSET", b'f'),
    ("CHAR_LENGTH", b'f'),
    ("CHECK", b'k'),
    ("CHECKSUM_AGG", b'f'),
    ("CHOOSE", b'f'),
    ("CHR", b'f'),
    ("CLOCK_TIMESTAMP", b'f'),
    ("COALESCE", b'k'),
    ("COERCIBILITY", b'f'),
    ("COL_LENGTH", b'f'),
    ("COL_NAME", b'f'),
    ("COLLATE", b'k'),
    ("COLLATION", b'f'),
    ("COLLATIONPROPERTY", b'f'),
    ("COLUMN", b'k'),
    ("COLUMNPROPERTY", b'f'),
    ("COLUMNS_UPDATED", b'f'),
    ("COMPRESS", b'f'),
    ("CONCAT", b'f'),
    ("CONCAT_WS", b'f'),
    ("CONDITION", b'k'),
    ("CONNECTION_ID", b'f'),
    ("CONSTRAINT", b'k'),
    ("CONTINUE", b'k'),
    ("CONV", b'f'),
    ("CONVERT", b'f'),
    ("CONVERT_FROM", b'f'),
    ("CONVERT_TO", b'f'),
    ("CONVERT_TZ", b'f'),
    ("COS", b'f'),
    ("COT", b'f'),
    ("COUNT", b'f'),
    ("COUNT_BIG", b'k'),
    ("CRC32", b'f'),
    ("CREATE", b'k'),
    ("CUME_DIST", b'f'),
    ("CURDATE", b'f'),
    ("CURRENT_DATE", b'k'),
    ("CURRENT_DATABASE", b'f'),
    ("CURRENT_TIME", b'k'),
    ("CURRENT_TIMESTAMP", b'k'),
    ("CURRENT_QUERY", b'f'),
    ("CURRENT_SCHEMA", b'f'),
    ("CURRENT_SCHEMAS", b'f'),
    ("CURRENT_SETTING", b'f'),
    ("CURRENT_USER", b'k'),
    ("CURRENTUSER", b'f'),
    ("CURRVAL", b'f'),
    ("CURSOR", b'k'),
    ("CURSOR_STATUS", b'f'),
    ("CURTIME", b'f'),
    ("DATABASE", b'k'),
    ("DATABASE_PRINCIPAL_ID", b'f'),
    ("DATABASEPROPERTYEX", b'f'),
    ("DATABASES", b'k'),
    ("DATALENGTH", b'f'),
    ("DATE", b'f'),
    ("DATEDIFF", b'f'),
    ("DATENAME", b'f'),
    ("DATEPART", b'f'),
    ("DATEADD", b'f'),
    ("DATESERIAL", b'f'),
    ("DATEVALUE", b'f'),
    ("DATEFROMPARTS", b'f'),
    ("DATETIME2FROMPARTS", b'f'),
    ("DATETIMEFROMPARTS", b'f'),
    ("DATETIMEOFFSETFROMPARTS", b'f'),
    ("DATE_ADD", b'f'),
    ("DATE_FORMAT", b'f'),
    ("DATE_PART", b'f'),
    ("DATE_SUB", b'f'),
    ("DATE_TRUNC", b'f'),
    ("DAY", b'f'),
    ("DAYNAME", b'f'),
    ("DAYOFMONTH", b'f'),
    ("DAYOFWEEK", b'f'),
    ("DAYOFYEAR", b'f'),
    ("DAY_HOUR", b'k'),
    ("DAY_MICROSECOND", b'k'),
    ("DAY_MINUTE", b'k'),
    ("DAY_SECOND", b'k'),
    ("DB_ID", b'f'),
    ("DB_NAME", b'f'),
    ("DEC", b'k'),
    ("DECIMAL", b'k'),
    ("DECLARE", b'k'),
    ("DECODE", b'f'),
    ("DECRYPTBYASMKEY", b'f'),
    ("DECRYPTBYCERT", b'f'),
    ("DECRYPTBYKEY", b'f'),
    ("DECRYPTBYKEYAUTOCERT", b'f'),
    ("DECRYPTBYPASSPHRASE", b'f'),
    ("DEFAULT", b'k'),
    ("DEGREES", b'f'),
    ("DELAY", b'k'),
    ("DELAYED", b'k'),
    ("DELETE", b'k'),
    ("DENSE_RANK", b'f'),
    ("DESC", b'k'),
    ("DESCRIBE", b'k'),
    ("DES_DECRYPT", b'f'),
    ("DES_ENCRYPT", b'f'),
    ("DETERMINISTIC", b'k'),
    ("DIFFERENCE", b'f'),
    ("DISTINCROW", b'k'),
    ("DISTINCT", b'k'),
    ("DIV", b'o'),
    ("DROP", b'k'),
    ("DUAL", b'k'),
    ("EACH", b'k'),
    ("ELSE", b'k'),
    ("ELSEIF", b'k'),
    ("ELT", b'f'),
    ("ENCLOSED", b'k'),
    ("ENCODE", b'f'),
    ("ENCRYPT", b'f'),
    ("ENCRYPTBYASMKEY", b'f'),
    ("ENCRYPTBYCERT", b'f'),
    ("ENCRYPTBYKEY", b'f'),
    ("ENCRYPTBYPASSPHRASE", b'f'),
    ("EOMONTH", b'f'),
    ("ENUM_FIRST", b'f'),
    ("ENUM_LAST", b'f'),
    ("ENUM_RANGE", b'f'),
    ("ESCAPED", b'k'),
    ("EXEC", b'k'),
    ("EXECUTE", b'k'),
    ("EXISTS", b'k'),
    ("EXIT", b'k'),
    ("EXP", b'f'),
    ("EXPLAIN", b'k'),
    ("EXPORT_SET", b'f'),
    ("EXTRACT", b'f'),
    ("EXTRACTVALUE", b'f'),
    ("EXTRACT_VALUE", b'f'),
    ("EVENTDATA", b'f'),
    ("FALSE", b'1'),
    ("FETCH", b'k'),
    ("FIELD", b'f'),
    ("FILE_ID", b'f'),
    ("FILE_IDEX", b'f'),
    ("FILE_NAME", b'f'),
    ("FILEGROUP_ID", b'f'),
    ("FILEGROUP_NAME", b'f'),
    ("FILEGROUPPROPERTY", b'f'),
    ("FILEPROPERTY", b'f'),
    ("FIND_IN_SET", b'f'),
    ("FIRST_VALUE", b'f'),
    ("FLOOR", b'f'),
    ("FN_VIRTUALFILESTATS", b'f'),
    ("FORCE", b'k'),
    ("FOREIGN", b'k'),
    ("FOR", b'n'),
    ("FORMAT", b'f'),
    ("FOUND_ROWS", b'f'),
    ("FROM", b'k'),
    ("FROM_DAYS", b'f'),
    ("FROM_UNIXTIME", b'f'),
    ("FULLTEXT", b'k'),
    ("FULLTEXTCATALOGPROPERTY", b'f'),
    ("FULLTEXTSERVICEPROPERTY", b'f'),
    ("GENERATE_SERIES", b'f'),
    ("GENERATE_SUBSCRIPTS", b'f'),
    ("GETDATE", b'f'),
    ("GETUTCDATE", b'f'),
    ("GET_BIT", b'f'),
    ("GET_BYTE", b'f'),
    ("GET_FORMAT", b'f'),
    ("GET_LOCK", b'f'),
    ("GOTO", b'k'),
    ("GRANT", b'k'),
    ("GREATEST", b'f'),
    ("GROUP", b'n'),
    ("GROUPING", b'f'),
    ("GROUPING_ID", b'f'),
    ("GROUP_CONCAT", b'f'),
    ("HAS_PERMS_BY_NAME", b'f'),
    ("HASHBYTES", b'f'),
    ("HAVING", b'k'),
    ("HEX", b'f'),
    ("HIGH_PRIORITY", b'k'),
    ("HOUR", b'f'),
    ("HOUR_MICROSECOND", b'k'),
    ("HOUR_MINUTE", b'k'),
    ("HOUR_SECOND", b'k'),
    ("HOST_NAME", b'f'),
    ("IDENT_CURRENT", b'f'),
    ("IDENT_INCR", b'f'),
    ("IDENT_SEED", b'f'),
    ("IDENTIFY", b'f'),
    // function in most dialects, statement keyword in T-SQL
    ("IF", b'k'),
    ("IFF", b'f'),
    ("IFNULL", b'f'),
    ("IGNORE", b'k'),
    ("IIF", b'f'),
    // dual-role: function call or membership test; folding special-cases it
    ("IN", b'n'),
    ("INDEX", b'k'),
    ("INDEX_COL", b'f'),
    ("INDEXKEY_PROPERTY", b'f'),
    ("INDEXPROPERTY", b'f'),
    ("INET_ATON", b'f'),
    ("INET_NTOA", b'f'),
    ("INFILE", b'k'),
    ("INITCAP", b'f'),
    ("INNER", b'k'),
    ("INOUT", b'k'),
    ("INSENSITIVE", b'k'),
    ("INSERT", b'k'),
    ("INSTR", b'f'),
    ("INSTRREV", b'f'),
    ("INT", b'k'),
    ("INT1", b'k'),
    ("INT2", b'k'),
    ("INT3", b'k'),
    ("INT4", b'k'),
    ("INT8", b'k'),
    ("INTEGER", b'k'),
    ("INTERVAL", b'k'),
    ("INTO", b'k'),
    ("IS", b'o'),
    ("ISDATE", b'f'),
    ("ISEMPTY", b'f'),
    ("ISFINITE", b'f'),
    ("ISNULL", b'f'),
    ("ISNUMERIC", b'f'),
    ("IS_FREE_LOCK", b'f'),
    ("IS_MEMBER", b'f'),
    ("IS_ROLEMEMBER", b'f'),
    ("IS_OBJECTSIGNED", b'f'),
    ("IS_SRVROLEMEMBER", b'f'),
    ("IS_USED_LOCK", b'f'),
    ("ITERATE", b'k'),
    ("JOIN", b'k'),
    ("JUSTIFY_DAYS", b'f'),
    ("JUSTIFY_HOURS", b'f'),
    ("JUSTIFY_INTERVAL", b'f'),
    ("KEY_ID", b'f'),
    ("KEY_GUID", b'f'),
    ("KEYS", b'k'),
    ("KILL", b'k'),
    ("LAG", b'f'),
    ("LAST_INSERT_ID", b'f'),
    ("LAST_VALUE", b'f'),
    ("LASTVAL", b'f'),
    ("LCASE", b'f'),
    ("LEAD", b'f'),
    ("LEADING", b'k'),
    ("LEAST", b'f'),
    ("LEAVE", b'k'),
    // LEFT JOIN vs LEFT(); phrase entries win when a join follows
    ("LEFT", b'n'),
    ("LENGTH", b'f'),
    ("LIKE", b'o'),
    ("LIMIT", b'k'),
    ("LINEAR", b'k'),
    ("LINES", b'k'),
    ("LN", b'f'),
    ("LOAD", b'k'),
    ("LOAD_FILE", b'f'),
    ("LOCALTIME", b'k'),
    ("LOCALTIMESTAMP", b'k'),
    ("LOCATE", b'f'),
    ("LOCK", b'n'),
    ("LOG", b'f'),
    ("LOG10", b'f'),
    ("LOG2", b'f'),
    ("LONGBLOB", b'k'),
    ("LONGTEXT", b'k'),
    ("LOOP", b'k'),
    ("LOWER", b'f'),
    ("LOWER_INC", b'f'),
    ("LOWER_INF", b'f'),
    ("LOW_PRIORITY", b'k'),
    ("LPAD", b'f'),
    ("LTRIM", b'f'),
    ("MAKEDATE", b'f'),
    ("MAKE_SET", b'f'),
    ("MASKLEN", b'f'),
    ("MASTER_BIND", b'k'),
    ("MASTER_POS_WAIT", b'f'),
    ("MASTER_SSL_VERIFY_SERVER_CERT", b'k'),
    ("MATCH", b'k'),
    ("MAX", b'f'),
    ("MAXVALUE", b'k'),
    ("MD5", b'f'),
    ("MEDIUMBLOB", b'k'),
    ("MEDIUMINT", b'k'),
    ("MEDIUMTEXT", b'k'),
    ("MERGE", b'k'),
    ("MICROSECOND", b'f'),
    ("MID", b'f'),
    ("MIDDLEINT", b'k'),
    ("MIN", b'f'),
    ("MINUTE", b'f'),
    ("MINUTE_MICROSECOND", b'k'),
    ("MINUTE_SECOND", b'k'),
    ("MOD", b'o'),
    ("MODE", b'n'),
    ("MODIFIES", b'k'),
    ("MONTH", b'f'),
    ("MONTHNAME", b'f'),
    ("NAME_CONST", b'f'),
    ("NETMASK", b'f'),
    ("NEXTVAL", b'f'),
    ("NOT", b'o'),
    ("NOW", b'f'),
    ("NO_WRITE_TO_BINLOG", b'k'),
    ("NTH_VALUE", b'f'),
    ("NTILE", b'f'),
    ("NULL", b'1'),
    ("NULLIF", b'f'),
    ("NUMERIC", b'k'),
    ("NZ", b'f'),
    ("OBJECT_DEFINITION", b'f'),
    ("OBJECT_ID", b'f'),
    ("OBJECT_NAME", b'f'),
    ("OBJECT_SCHEMA_NAME", b'f'),
    ("OBJECTPROPERTY", b'f'),
    ("OBJECTPROPERTYEX", b'f'),
    ("OCT", b'f'),
    ("OCTET_LENGTH", b'f'),
    ("OFFSET", b'k'),
    ("OLD_PASSWORD", b'f'),
    ("ONE_SHOT", b'k'),
    // not SQL at all, but a staple of defacement payloads
    ("OWN3D", b'k'),
    ("OPEN", b'k'),
    ("OPENDATASOURCE", b'f'),
    ("OPENXML", b'f'),
    ("OPENQUERY", b'f'),
    ("OPENROWSET", b'f'),
    ("OPTIMIZE", b'k'),
    ("OPTION", b'k'),
    ("OPTIONALLY", b'k'),
    ("OR", b'&'),
    ("ORD", b'f'),
    ("ORDER", b'n'),
    ("ORIGINAL_DB_NAME", b'f'),
    ("ORIGINAL_LOGIN", b'f'),
    ("OUT", b'k'),
    ("OUTFILE", b'k'),
    // pgsql operator that reads like a function
    ("OVERLAPS", b'f'),
    ("OVERLAY", b'f'),
    ("PARSENAME", b'f'),
    ("PARTITION", b'k'),
    // SET PASSWORD keyword and a function; one tag per spelling
    ("PASSWORD", b'k'),
    ("PATINDEX", b'f'),
    ("PATHINDEX", b'f'),
    ("PERCENT_RANK", b'f'),
    ("PERCENTILE_COUNT", b'f'),
    ("PERCENTILE_DISC", b'f'),
    ("PERCENTILE_RANK", b'f'),
    ("PERIOD_ADD", b'f'),
    ("PERIOD_DIFF", b'f'),
    ("PERMISSIONS", b'f'),
    ("PG_ADVISORY_LOCK", b'f'),
    ("PG_BACKEND_PID", b'f'),
    ("PG_CANCEL_BACKEND", b'f'),
    ("PG_CREATE_RESTORE_POINT", b'f'),
    ("PG_RELOAD_CONF", b'f'),
    ("PG_CLIENT_ENCODING", b'f'),
    ("PG_CONF_LOAD_TIME", b'f'),
    ("PG_LISTENING_CHANNELS", b'f'),
    ("PG_HAS_ROLE", b'f'),
    ("PG_IS_IN_RECOVERY", b'f'),
    ("PG_IS_OTHER_TEMP_SCHEMA", b'f'),
    ("PG_LS_DIR", b'f'),
    ("PG_MY_TEMP_SCHEMA", b'f'),
    ("PG_POSTMASTER_START_TIME", b'f'),
    ("PG_READ_FILE", b'f'),
    ("PG_READ_BINARY_FILE", b'f'),
    ("PG_ROTATE_LOGFILE", b'f'),
    ("PG_STAT_FILE", b'f'),
    ("PG_SLEEP", b'f'),
    ("PG_START_BACKUP", b'f'),
    ("PG_STOP_BACKUP", b'f'),
    ("PG_SWITCH_XLOG", b'f'),
    ("PG_TERMINATE_BACKEND", b'f'),
    ("PG_TRIGGER_DEPTH", b'f'),
    ("PI", b'f'),
    ("POSITION", b'f'),
    ("POW", b'f'),
    ("POWER", b'f'),
    ("PRECISION", b'k'),
    ("PRIMARY", b'k'),
    ("PROCEDURE", b'k'),
    ("PUBLISHINGSERVERNAME", b'f'),
    ("PURGE", b'k'),
    ("PWDCOMPARE", b'f'),
    ("PWDENCRYPT", b'f'),
    ("QUARTER", b'f'),
    ("QUOTE", b'f'),
    ("QUOTE_IDENT", b'f'),
    ("QUOTENAME", b'f'),
    ("QUOTE_LITERAL", b'f'),
    ("QUOTE_NULLABLE", b'f'),
    ("RADIANS", b'f'),
    ("RAND", b'f'),
    ("RANDOM", b'f'),
    ("RANDOMBLOB", b'f'),
    ("RANGE", b'k'),
    ("RANK", b'f'),
    ("READ", b'k'),
    ("READS", b'k'),
    ("READ_WRITE", b'k'),
    // only appears in data definition
    ("REAL", b'n'),
    ("REFERENCES", b'k'),
    ("REGEXP", b'o'),
    ("REGEXP_REPLACE", b'f'),
    ("REGEXP_MATCHES", b'f'),
    ("REGEXP_SPLIT_TO_TABLE", b'f'),
    ("REGEXP_SPLIT_TO_ARRAY", b'f'),
    ("RELEASE", b'k'),
    ("RELEASE_LOCK", b'f'),
    ("RENAME", b'k'),
    ("REPEAT", b'k'),
    ("REPLACE", b'k'),
    ("REPLICATE", b'f'),
    ("REQUIRE", b'k'),
    ("RESIGNAL", b'k'),
    ("RESTRICT", b'k'),
    ("RETURN", b'k'),
    ("REVERSE", b'f'),
    ("REVOKE", b'k'),
    ("RIGHT", b'n'),
    ("RLIKE", b'o'),
    ("ROUND", b'f'),
    ("ROW", b'f'),
    ("ROW_COUNT", b'f'),
    ("ROW_NUMBER", b'f'),
    ("ROW_TO_JSON", b'f'),
    ("RPAD", b'f'),
    ("RTRIM", b'f'),
    ("SCHEMA", b'k'),
    ("SCHEMA_ID", b'f'),
    ("SCHAMA_NAME", b'f'),
    ("SCHEMAS", b'k'),
    ("SCOPE_IDENTITY", b'f'),
    ("SECOND_MICROSECOND", b'k'),
    ("SEC_TO_TIME", b'f'),
    ("SELECT", b'k'),
    ("SENSITIVE", b'k'),
    ("SEPARATOR", b'k'),
    ("SESSION_USER", b'f'),
    ("SET", b'k'),
    ("SETSEED", b'f'),
    ("SETVAL", b'f'),
    ("SET_BIT", b'f'),
    ("SET_BYTE", b'f'),
    ("SET_CONFIG", b'f'),
    ("SET_MASKLEN", b'f'),
    ("SHA", b'f'),
    ("SHA1", b'f'),
    ("SHA2", b'f'),
    ("SHOW", b'n'),
    ("SHUTDOWN", b'k'),
    ("SIGN", b'f'),
    ("SIGNBYASMKEY", b'f'),
    ("SIGNBYCERT", b'f'),
    ("SIGNAL", b'k'),
    ("SIMILAR", b'k'),
    ("SIN", b'f'),
    ("SLEEP", b'f'),
    ("SMALLDATETIMEFROMPARTS", b'f'),
    ("SMALLINT", b'k'),
    ("SOUNDEX", b'f'),
    ("SOUNDS", b'o'),
    ("SPACE", b'f'),
    ("SPATIAL", b'k'),
    ("SPECIFIC", b'k'),
    ("SPLIT_PART", b'f'),
    ("SQL", b'k'),
    ("SQLEXCEPTION", b'k'),
    ("SQLSTATE", b'k'),
    ("SQLWARNING", b'k'),
    ("SQL_BIG_RESULT", b'k'),
    ("SQL_CALC_FOUND_ROWS", b'k'),
    ("SQL_SMALL_RESULT", b'k'),
    ("SQL_VARIANT_PROPERTY", b'f'),
    ("SQRT", b'f'),
    ("SSL", b'k'),
    ("STARTING", b'k'),
    ("STATEMENT_TIMESTAMP", b'f'),
    ("STATS_DATE", b'f'),
    ("STDDEV", b'f'),
    ("STDDEV_POP", b'f'),
    ("STDDEV_SAMP", b'f'),
    ("STRAIGHT_JOIN", b'k'),
    ("STRCMP", b'f'),
    ("STRCONV", b'f'),
    ("STRING_AGG", b'f'),
    ("STRING_TO_ARRAY", b'f'),
    ("STRPOS", b'f'),
    ("STR_TO_DATE", b'f'),
    ("STUFF", b'f'),
    ("SUBDATE", b'f'),
    ("SUBSTR", b'f'),
    ("SUBSTRING", b'f'),
    ("SUBSTRING_INDEX", b'f'),
    ("SUBTIME", b'f'),
    ("SUM", b'f'),
    ("SUSER_ID", b'f'),
    ("SUSER_SID", b'f'),
    ("SUSER_SNAME", b'f'),
    ("SUSER_NAME", b'f'),
    ("SYSDATE", b'f'),
    ("SYSDATETIME", b'f'),
    ("SYSDATETIMEOFFSET", b'f'),
    ("SYSCOLUMNS", b'k'),
    ("SYSOBJECTS", b'k'),
    ("SYSUSERS", b'k'),
    ("SYSUTCDATETME", b'f'),
    ("SYSTEM_USER", b'f'),
    ("SWITCHOFFET", b'f'),
    ("TABLE", b'k'),
    ("TAN", b'f'),
    ("TERMINATED", b'k'),
    ("TERTIARY_WEIGHTS", b'f'),
    ("TEXTPTR", b'f'),
    ("TEXTVALID", b'f'),
    ("THEN", b'k'),
    ("TIME", b'k'),
    ("TIMEDIFF", b'f'),
    ("TIMEFROMPARTS", b'f'),
    ("TIMEOFDAY", b'f'),
    ("TIMESERIAL", b'f'),
    ("TIMEVALUE", b'f'),
    ("TIMESTAMP", b'f'),
    ("TIMESTAMPADD", b'f'),
    ("TIME_FORMAT", b'f'),
    ("TIME_TO_SEC", b'f'),
    ("TINYBLOB", b'k'),
    ("TINYINT", b'k'),
    ("TINYTEXT", b'k'),
    ("TODATETIMEOFFSET", b'f'),
    ("TO_ASCII", b'f'),
    ("TO_CHAR", b'f'),
    ("TO_HEX", b'f'),
    ("TO_DAYS", b'f'),
    ("TO_DATE", b'f'),
    ("TO_NUMBER", b'f'),
    ("TO_SECONDS", b'f'),
    ("TO_TIMESTAMP", b'f'),
    ("TOP", b'k'),
    // only used inside TRIM(TRAILING ...)
    ("TRAILING", b'n'),
    ("TRANSACTION_TIMESTAMP", b'f'),
    ("TRANSLATE", b'f'),
    ("TRIGGER", b'k'),
    ("TRIGGER_NESTLEVEL", b'f'),
    ("TRIM", b'f'),
    ("TRUE", b'1'),
    ("TRUNC", b'f'),
    ("TRUNCATE", b'f'),
    ("TRY_CAST", b'f'),
    ("TRY_CONVERT", b'f'),
    ("TRY_PARSE", b'f'),
    ("TYPE_ID", b'f'),
    ("TYPE_NAME", b'f'),
    ("TYPEPROPERTY", b'f'),
    ("UCASE", b'f'),
    ("UNCOMPRESS", b'f'),
    ("UNCOMPRESS_LENGTH", b'f'),
    ("UNDO", b'k'),
    ("UNHEX", b'f'),
    ("UNION", b'U'),
    // evasion spelling that keeps showing up
    ("UNI_ON", b'U'),
    ("UNIQUE", b'n'),
    ("UNIX_TIMESTAMP", b'f'),
    ("UNLOCK", b'k'),
    ("UNKNOWN", b'k'),
    ("UNNEST", b'f'),
    ("UNSIGNED", b'k'),
    ("UPDATE", b'k'),
    ("UPDATEXML", b'f'),
    ("UPPER", b'f'),
    ("UPPER_INC", b'f'),
    ("UPPER_INF", b'f'),
    ("USAGE", b'k'),
    ("USE", b'k'),
    // T-SQL function, but USER_ID is a too-common column name to flag
    ("USER_ID", b'n'),
    ("USER_NAME", b'f'),
    ("USING", b'f'),
    ("UTC_DATE", b'k'),
    ("UTC_TIME", b'k'),
    ("UTC_TIMESTAMP", b'k'),
    ("UUID", b'f'),
    ("UUID_SHORT", b'f'),
    ("VALUES", b'k'),
    ("VARBINARY", b'k'),
    ("VARCHAR", b'k'),
    ("VARCHARACTER", b'k'),
    ("VARIANCE", b'f'),
    ("VAR", b'f'),
    ("VARP", b'f'),
    ("VARYING", b'k'),
    ("VAR_POP", b'f'),
    ("VAR_SAMP", b'f'),
    ("VERIFYSIGNEDBYASMKEY", b'f'),
    ("VERIFYSIGNEDBYCERT", b'f'),
    ("VERSION", b'f'),
    ("WAITFOR", b'k'),
    ("WEEK", b'f'),
    ("WEEKDAY", b'f'),
    ("WEEKDAYNAME", b'f'),
    ("WEEKOFYEAR", b'f'),
    ("WHEN", b'k'),
    ("WHERE", b'k'),
    ("WHILE", b'k'),
    ("WIDTH_BUCKET", b'f'),
    ("WITH", b'k'),
    ("XMLAGG", b'f'),
    ("XMLELEMENT", b'f'),
    ("XMLCOMMENT", b'f'),
    ("XMLCONCAT", b'f'),
    ("XMLFOREST", b'f'),
    ("XMLFORMAT", b'f'),
    ("XMLTYPE", b'f'),
    ("XMLPI", b'f'),
    ("XMLROOT", b'f'),
    ("XMLEXISTS", b'f'),
    ("XML_IS_WELL_FORMED", b'f'),
    ("XPATH", b'f'),
    ("XPATH_EXISTS", b'f'),
    ("XOR", b'o'),
    ("XP_EXECRESULTSET", b'k'),
    ("YEAR", b'f'),
    ("YEARWEEK", b'f'),
    ("YEAR_MONTH", b'k'),
    ("ZEROFILL", b'k'),
];

/// Multi-word spellings, keyed by the words joined with a single space.
///
/// Longer phrases are reached pair-at-a-time: an entry for the two-word
/// prefix keeps the folding loop merging, and the full spelling carries the
/// final tag (`AT TIME` -> `AT TIME ZONE`).
pub(crate) static PHRASES: &[(&str, u8)] = &[
    ("AT TIME", b'n'),
    ("AT TIME ZONE", b'k'),
    ("IN BOOLEAN", b'n'),
    ("IN BOOLEAN MODE", b'k'),
    ("IS DISTINCT", b'n'),
    ("IS DISTINCT FROM", b'k'),
    ("IS NOT DISTINCT", b'n'),
    ("IS NOT DISTINCT FROM", b'k'),
    ("CROSS JOIN", b'k'),
    ("ALTER DOMAIN", b'k'),
    ("ALTER TABLE", b'k'),
    ("GROUP BY", b'B'),
    ("ORDER BY", b'B'),
    ("OWN3D BY", b'B'),
    ("SELECT ALL", b'k'),
    ("READ WRITE", b'k'),
    ("LOCK TABLE", b'k'),
    ("LOCK TABLES", b'k'),
    ("LEFT OUTER", b'k'),
    ("LEFT JOIN", b'k'),
    ("RIGHT OUTER", b'k'),
    ("RIGHT JOIN", b'k'),
    ("FULL OUTER", b'k'),
    ("NATURAL JOIN", b'k'),
    ("NATURAL INNER", b'k'),
    ("NATURAL OUTER", b'k'),
    ("NATURAL LEFT", b'k'),
    ("NATURAL RIGHT", b'k'),
    ("NATURAL FULL", b'k'),
    ("SOUNDS LIKE", b'o'),
    ("IS NOT", b'o'),
    ("NEXT VALUE", b'n'),
    ("NEXT VALUE FOR", b'k'),
    ("NOT LIKE", b'o'),
    ("NOT BETWEEN", b'o'),
    ("NOT SIMILAR", b'o'),
    ("NOT SIMILAR TO", b'o'),
    ("NOT RLIKE", b'o'),
    ("NOT REGEXP", b'o'),
    ("NOT IN", b'o'),
    ("SIMILAR TO", b'o'),
    ("UNION ALL", b'U'),
    ("INTERSECT ALL", b'o'),
];

/// Multi-character operator spellings.
///
/// `<=` is a strict prefix of the null-safe `<=>`; the matcher orders the
/// table longest-first so the three-character form always wins.
pub(crate) static OPERATORS: &[&str] = &[
    "!=",
    "||",
    "&&",
    ">=",
    ">>",
    "<=",
    "<=>",
    "<>",
    ":=",
    "<<",
    "!<",
    "!>",
    "+=",
    "-=",
    "*=",
    "/=",
    "%=",
    "|=",
    "&=",
    "^=",
    "|/",
    "!!",
    "~*",
    "!~",
    "@>",
    "<@",
];
